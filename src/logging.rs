use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            enable_file_logs: false,
            log_dir: "./logs".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create rolling file appender: {0}")]
    Appender(#[from] InitError),
    #[error("failed to initialize tracing: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Installs the global subscriber. A subscriber that is already set (e.g.
/// by another test) is not an error.
pub fn init_tracing(config: &LogConfig) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let stdout_layer = fmt::layer().with_target(true).with_thread_ids(false);

    let registry = Registry::default().with(env_filter).with(stdout_layer);

    let result = if config.enable_file_logs {
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("flashcard-progress")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&config.log_dir)?;
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();
        registry.with(file_layer).try_init()
    } else {
        registry.try_init()
    };

    match result {
        Err(e) if !e.to_string().contains("already been set") => Err(e.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let cfg = LogConfig::default();
        init_tracing(&cfg).unwrap();
        init_tracing(&cfg).unwrap();
    }

    #[test]
    fn file_logging_after_global_init_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = LogConfig {
            enable_file_logs: true,
            log_dir: dir.path().to_string_lossy().into_owned(),
            ..LogConfig::default()
        };
        init_tracing(&LogConfig::default()).unwrap();
        init_tracing(&cfg).unwrap();
    }
}
