use crate::models::icon::IconId;
use crate::models::notification::SeverityLevel;
use crate::utils::acronym::acronym;
use crate::utils::icon::icon_asset_url;
use tracing::instrument;

#[tauri::command]
#[specta::specta]
#[instrument(level = "trace")]
pub fn get_icon_path(icon: IconId) -> String {
    icon.path().to_string()
}

#[tauri::command]
#[specta::specta]
#[instrument(level = "trace")]
pub fn get_severity_colour(level: SeverityLevel) -> String {
    level.colour().to_string()
}

#[tauri::command]
#[specta::specta]
#[instrument(level = "trace")]
pub fn get_acronym(name: String) -> String {
    acronym(&name)
}

#[tauri::command]
#[specta::specta]
#[instrument(level = "trace")]
pub fn get_icon_asset_url(ident: String) -> String {
    icon_asset_url(&ident)
}
