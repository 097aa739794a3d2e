use crate::utils::icon::icon_asset_url;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;

/// A mod entry inside a collection.
#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq)]
pub struct Plugin {
    pub ident: String,
    pub name: String,
    pub source: String,
    pub api_url: String,
    pub version: String,
    pub is_enabled: bool,
    #[specta(type = String)]
    pub install_time: DateTime<Utc>,
}

impl Plugin {
    /// Creates a disabled plugin installed now.
    pub fn new(
        ident: impl Into<String>,
        name: impl Into<String>,
        source: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            ident: ident.into(),
            name: name.into(),
            source: source.into(),
            api_url: api_url.into(),
            version: String::new(),
            is_enabled: false,
            install_time: Utc::now(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    pub fn icon_url(&self) -> String {
        icon_asset_url(&self.ident)
    }
}
