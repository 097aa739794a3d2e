use crate::config::AppSettings;
use crate::models::error::KError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "katabasis.log";

/// Installs the global subscriber: stderr plus a daily rolling file in `log_dir`.
///
/// Keep the returned guard alive for as long as the process runs, dropping it
/// flushes and stops the file writer.
pub fn init(settings: &AppSettings) -> Result<WorkerGuard, KError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .map_err(|e| KError::LoggingError(e.to_string()))?;

    let appender = tracing_appender::rolling::daily(&settings.log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|e| KError::LoggingError(e.to_string()))?;

    tracing::info!(log_dir = %settings.log_dir.display(), "Logging initialised");

    Ok(guard)
}
