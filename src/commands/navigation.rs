use crate::models::sidebar::{SidebarItem, SETTINGS_ITEM, SIDEBAR_ITEMS};

#[tauri::command]
#[specta::specta]
pub fn get_sidebar_items() -> Vec<SidebarItem> {
    SIDEBAR_ITEMS.to_vec()
}

#[tauri::command]
#[specta::specta]
pub fn get_settings_item() -> SidebarItem {
    SETTINGS_ITEM
}
