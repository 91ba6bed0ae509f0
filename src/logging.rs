//! Logging setup
//!
//! Installs a `tracing` subscriber for hosts that do not bring their own.
//! Console output always; a daily rolling log file when
//! [`LoggingConfig::log_to_file`] is set. `RUST_LOG` takes precedence over
//! the configured filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ensure_app_data_dir, LoggingConfig};
use crate::error::{FrameStatsError, Result};

/// Prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "framestats.log";

/// Install the global subscriber
///
/// Returns the file writer guard when file logging is enabled; keep it alive
/// for as long as logs should be flushed. Fails with a `Config` error if a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let (file_layer, guard) = if config.log_to_file {
        let dir = match &config.log_dir {
            Some(dir) => dir.clone(),
            None => ensure_app_data_dir()?.join("logs"),
        };
        std::fs::create_dir_all(&dir).map_err(|e| {
            FrameStatsError::Config(format!("Failed to create log directory {:?}: {}", dir, e))
        })?;

        let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| FrameStatsError::Config(format!("Failed to install logger: {}", e)))?;

    tracing::info!("Logging initialized");
    Ok(guard)
}
