use crate::models::error::KError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use specta::Type;
use std::str::FromStr;

/// Games Katabasis can build collections for.
#[derive(Serialize, Deserialize, Type, Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Game {
    LethalCompany,
}

#[derive(Serialize, Deserialize, Type, Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Loader {
    BepInEx,
}

impl Game {
    /// Steam app id of the game.
    pub fn steam_id(self) -> u32 {
        match self {
            Game::LethalCompany => 1966720,
        }
    }

    pub fn loader(self) -> Loader {
        match self {
            Game::LethalCompany => Loader::BepInEx,
        }
    }
}

impl FromStr for Game {
    type Err = KError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lethalcompany" | "lethal-company" | "lethal company" | "lc" => Ok(Game::LethalCompany),
            _ => Err(KError::UnknownGame(s.to_string())),
        }
    }
}
