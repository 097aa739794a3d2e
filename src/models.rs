pub mod collection;
pub mod error;
pub mod game;
pub mod icon;
pub mod notification;
pub mod plugin;
pub mod sidebar;
