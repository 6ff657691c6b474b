use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Infrastructure settings read once at startup
pub struct BootstrapSettings {
    audit_database_url: String,
    directory_database_url: String,
    server_host: String,
    server_port: u16,
    api_key: String,
    directory_lookup_timeout: Duration,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` naming the first setting that is missing or invalid
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let audit_database_url_spec = ConfigSpec::new(env_provider.clone())
            .env_override("AUDIT_DATABASE_URL")
            .default_value("sqlite://audit.db?mode=rwc")
            .min_length(1);

        let directory_database_url_spec = ConfigSpec::new(env_provider.clone())
            .env_override("DIRECTORY_DATABASE_URL")
            .default_value("sqlite://directory.db?mode=rwc")
            .min_length(1);

        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("8000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let api_key_spec = ConfigSpec::new(env_provider.clone())
            .env_override("AUDIT_API_KEY")
            .required(true)
            .min_length(16);

        let lookup_timeout_spec = ConfigSpec::new(env_provider.clone())
            .env_override("DIRECTORY_LOOKUP_TIMEOUT_MS")
            .default_value("2000")
            .validator(|value| ConfigSpec::validate_integer_range(value, 1, 60_000));

        let audit_database_url = audit_database_url_spec.load_setting_with_source()?.value;
        let directory_database_url = directory_database_url_spec.load_setting_with_source()?.value;
        let server_host = host_spec.load_setting_with_source()?.value;
        let port_value = port_spec.load_setting_with_source()?.value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;
        let api_key = api_key_spec.load_setting_with_source()?.value;
        let timeout_value = lookup_timeout_spec.load_setting_with_source()?.value;
        let directory_lookup_timeout = ConfigSpec::parse_duration_millis(&timeout_value, "DIRECTORY_LOOKUP_TIMEOUT_MS")?;

        Ok(Self {
            audit_database_url,
            directory_database_url,
            server_host,
            server_port,
            api_key,
            directory_lookup_timeout,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn audit_database_url(&self) -> &str {
        &self.audit_database_url
    }

    pub fn directory_database_url(&self) -> &str {
        &self.directory_database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn directory_lookup_timeout(&self) -> Duration {
        self.directory_lookup_timeout
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("audit_database_url", &self.audit_database_url)
            .field("directory_database_url", &self.directory_database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("api_key", &"[redacted]")
            .field("directory_lookup_timeout", &self.directory_lookup_timeout)
            .finish()
    }
}
