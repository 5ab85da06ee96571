//! Logging system initialization
//!
//! Sets up `tracing` according to the `[logging]` section of the config.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::DashboardError;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// One-shot commands print to stdout
    Console,
    /// The terminal belongs to the dashboard; without a log file the
    /// output is discarded
    Terminal,
}

/// Initialize logging based on configuration
///
/// The returned `WorkerGuard` must stay alive for the whole program so that
/// buffered lines are flushed on exit.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> Result<WorkerGuard, DashboardError> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn io::Write + Send + Sync> = match (log_file, target) {
        (Some(log_file), _) if config.enable_rotation => {
            let path = Path::new(log_file);
            let dir = path.parent().unwrap_or(Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("dashboard.log")
                .trim_end_matches(".log")
                .to_string();
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| DashboardError::config(format!("log appender: {}", e)))?;
            Box::new(appender)
        }
        (Some(log_file), _) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| DashboardError::config(format!("log file {}: {}", log_file, e)))?;
            Box::new(file)
        }
        (None, LogTarget::Terminal) => Box::new(io::sink()),
        (None, LogTarget::Console) => Box::new(io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| DashboardError::config(format!("log level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none() && target == LogTarget::Console);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| DashboardError::config(format!("logging already initialized: {}", e)))?;

    Ok(guard)
}
