mod bootstrap_settings;
mod config_spec;
pub mod database;
mod env_provider;
pub mod errors;
mod logging;

pub use bootstrap_settings::BootstrapSettings;
pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use database::{migrate_audit_database, migrate_directory_database, DatabaseConnections};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
