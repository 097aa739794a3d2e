use crate::models::error::KError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use specta::Type;

#[derive(Serialize, Deserialize, Type, Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SeverityLevel {
    Info = 0,
    Warning = 1,
    Error = 2,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 3] = [
        SeverityLevel::Info,
        SeverityLevel::Warning,
        SeverityLevel::Error,
    ];

    /// Accent colour used to render a notification of this level, as `#rrggbb`.
    pub fn colour(self) -> &'static str {
        match self {
            SeverityLevel::Error => "#bf616a",
            SeverityLevel::Warning => "#ebcb8b",
            SeverityLevel::Info => "#a3be8c",
        }
    }
}

impl TryFrom<u8> for SeverityLevel {
    type Error = KError;

    fn try_from(value: u8) -> Result<Self, <Self as TryFrom<u8>>::Error> {
        SeverityLevel::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(KError::UnknownSeverity(value))
    }
}

#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub level: SeverityLevel,
}

impl Notification {
    pub fn new<T: Into<String>, B: Into<String>>(title: T, body: B, level: SeverityLevel) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level,
        }
    }

    pub fn info<T: Into<String>, B: Into<String>>(title: T, body: B) -> Self {
        Self::new(title, body, SeverityLevel::Info)
    }

    pub fn warning<T: Into<String>, B: Into<String>>(title: T, body: B) -> Self {
        Self::new(title, body, SeverityLevel::Warning)
    }

    pub fn error<T: Into<String>, B: Into<String>>(title: T, body: B) -> Self {
        Self::new(title, body, SeverityLevel::Error)
    }

    pub fn colour(&self) -> &'static str {
        self.level.colour()
    }
}
