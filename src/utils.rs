pub mod acronym;
pub mod icon;
pub mod logging;
