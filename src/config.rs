use crate::models::error::KError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use specta::Type;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "katabasis";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq)]
pub struct AppSettings {
    pub version: u8,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        let base_dir = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            version: 0,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: base_dir.join("logs"),
        }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, KError> {
        Ok(confy::load(APP_NAME, None)?)
    }

    pub fn save(&self) -> Result<(), KError> {
        Ok(confy::store(APP_NAME, None, self)?)
    }

    pub fn load_path(path: impl AsRef<Path>) -> Result<AppSettings, KError> {
        Ok(confy::load_path(path)?)
    }

    pub fn save_path(&self, path: impl AsRef<Path>) -> Result<(), KError> {
        Ok(confy::store_path(path, self)?)
    }
}
