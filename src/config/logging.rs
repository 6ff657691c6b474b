use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::EnvironmentProvider;

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Read `LOG_LEVEL` (default `info`) and the optional `APP_LOG_FILE`
    pub fn from_env_provider(env_provider: &dyn EnvironmentProvider) -> Self {
        let log_level = env_provider
            .get_var("LOG_LEVEL")
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        let app_log_file = env_provider
            .get_var("APP_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            app_log_file,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional daily-rotated file output
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    if let Some(log_file_path) = &config.app_log_file {
        let directory = log_file_path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(directory)?;

        let file_name = log_file_path
            .file_name()
            .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;
        let file_appender = tracing_appender::rolling::daily(directory, file_name);

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::from_env_provider(&MockEnvironment::empty());

        assert_eq!(config.log_level, "info");
        assert_eq!(config.app_log_file, None);
    }

    #[test]
    fn test_logging_config_from_vars() {
        let env = MockEnvironment::empty()
            .with_var("LOG_LEVEL", "storeaudit_backend=debug,sea_orm=warn")
            .with_var("APP_LOG_FILE", "logs/audit-service.log");

        let config = LoggingConfig::from_env_provider(&env);

        assert_eq!(config.log_level, "storeaudit_backend=debug,sea_orm=warn");
        assert_eq!(config.app_log_file, Some(PathBuf::from("logs/audit-service.log")));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let config = LoggingConfig {
            log_level: "storeaudit_backend=[".to_string(),
            app_log_file: None,
        };

        assert!(matches!(init_logging(&config), Err(LoggingError::InvalidLogLevel(_))));
    }
}
