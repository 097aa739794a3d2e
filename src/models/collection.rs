use crate::models::error::KError;
use crate::models::game::Game;
use crate::models::plugin::Plugin;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::fmt;
use uuid::Uuid;

const ANY_VERSION: &str = "Any";

/// An ordered group of plugins targeting one game and mod loader.
#[derive(Serialize, Deserialize, Type, Clone, Debug)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub target: String,
    pub game_version: String,
    pub plugins: Vec<Plugin>,
    pub mod_loader: String,
    #[specta(type = String)]
    pub created: DateTime<Utc>,
    #[specta(type = String)]
    pub modified: DateTime<Utc>,
    #[specta(type = Option<String>)]
    pub last_played: Option<DateTime<Utc>>,
}

/// What the collection grid shows for a single collection.
#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq)]
pub struct CollectionCard {
    pub id: String,
    pub name: String,
    pub game: String,
    pub game_version: String,
}

impl Collection {
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        mod_loader: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().as_hyphenated().to_string(),
            name: name.into(),
            target: target.into(),
            game_version: ANY_VERSION.to_string(),
            plugins: Vec::new(),
            mod_loader: mod_loader.into(),
            created: now,
            modified: now,
            last_played: None,
        }
    }

    pub fn for_game(name: impl Into<String>, game: Game, game_version: impl Into<String>) -> Self {
        let mut collection = Self::new(name, game.to_string(), game.loader().to_string());
        collection.game_version = game_version.into();
        collection
    }

    /// Appends a plugin. Keeping identifiers unique is up to the caller.
    pub fn add_plugin(&mut self, plugin: Plugin) {
        self.plugins.push(plugin);
        self.touch();
    }

    pub fn plugin(&self, ident: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|p| p.ident == ident)
    }

    pub fn remove_plugin(&mut self, ident: &str) -> Option<Plugin> {
        let index = self.plugins.iter().position(|p| p.ident == ident)?;
        self.touch();
        Some(self.plugins.remove(index))
    }

    pub fn set_plugin_enabled(&mut self, ident: &str, enabled: bool) -> Result<(), KError> {
        let plugin = self
            .plugins
            .iter_mut()
            .find(|p| p.ident == ident)
            .ok_or_else(|| KError::PluginNotFound(ident.to_string()))?;

        plugin.set_enabled(enabled);
        self.touch();
        Ok(())
    }

    pub fn enabled_plugins(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter().filter(|p| p.is_enabled)
    }

    pub fn mark_played(&mut self) {
        self.last_played = Some(Utc::now());
    }

    pub fn card(&self) -> CollectionCard {
        CollectionCard::from(self)
    }

    fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl From<&Collection> for CollectionCard {
    fn from(c: &Collection) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            game: c.target.clone(),
            game_version: c.game_version.clone(),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collection: '{}'\t[{}, {}, {}]",
            self.name, self.target, self.game_version, self.id
        )
    }
}
