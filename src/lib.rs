pub mod commands;
pub mod config;
pub mod models;
pub mod utils;

use commands::collection::get_collection_card;
use commands::display::{get_acronym, get_icon_asset_url, get_icon_path, get_severity_colour};
use commands::get_app_settings;
use commands::navigation::{get_settings_item, get_sidebar_items};
use models::error::KError;
use specta_typescript::Typescript;
use std::path::Path;
use tauri_specta::{collect_commands, Builder};

/// Every command the webview may invoke. The host app mounts
/// `specta_builder().invoke_handler()` on its `tauri::Builder`.
pub fn specta_builder() -> Builder<tauri::Wry> {
    Builder::<tauri::Wry>::new().commands(collect_commands![
        get_icon_path,
        get_severity_colour,
        get_acronym,
        get_icon_asset_url,
        get_sidebar_items,
        get_settings_item,
        get_collection_card,
        get_app_settings,
    ])
}

/// Writes the TypeScript bindings for [`specta_builder`] to `path`.
pub fn export_bindings(path: impl AsRef<Path>) -> Result<(), KError> {
    let path = path.as_ref();
    specta_builder()
        .export(Typescript::default(), path)
        .map_err(|e| KError::BindingsExport(e.to_string()))?;

    tracing::info!("Exported bindings to {}", path.display());
    Ok(())
}
