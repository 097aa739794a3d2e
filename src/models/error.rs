use derive_more::Display;
use serde::Serialize;
use specta::Type;

#[derive(Type, Serialize, Debug, Display, Clone, PartialEq)]
pub enum KError {
    #[display("no icon has discriminant {_0}")]
    UnknownIcon(u8),
    #[display("no severity level has discriminant {_0}")]
    UnknownSeverity(u8),
    #[display("unsupported game: '{_0}'")]
    UnknownGame(String),
    #[display("plugin '{_0}' is not part of this collection")]
    PluginNotFound(String),
    #[display("config error: {_0}")]
    ConfigError(String),
    #[display("logging error: {_0}")]
    LoggingError(String),
    #[display("failed to export bindings: {_0}")]
    BindingsExport(String),
}

impl std::error::Error for KError {}

impl From<confy::ConfyError> for KError {
    fn from(e: confy::ConfyError) -> Self {
        KError::ConfigError(e.to_string())
    }
}
