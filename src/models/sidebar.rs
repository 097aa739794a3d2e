use crate::models::icon::IconId;
use serde::Serialize;
use specta::Type;

#[derive(Serialize, Type, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub display: &'static str,
    pub url: &'static str,
    pub icon: IconId,
}

impl SidebarItem {
    pub const fn new(display: &'static str, url: &'static str, icon: IconId) -> Self {
        Self { display, url, icon }
    }
}

/// Navigation entries at the top of the sidebar, in display order.
pub const SIDEBAR_ITEMS: [SidebarItem; 2] = [
    SidebarItem::new("Home", "/", IconId::Home),
    SidebarItem::new("Collections", "/collections", IconId::Library),
];

/// Entry pinned to the bottom of the sidebar.
pub const SETTINGS_ITEM: SidebarItem = SidebarItem::new("Settings", "/settings", IconId::Settings);
