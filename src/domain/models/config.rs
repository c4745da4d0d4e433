use serde::{Deserialize, Serialize};

/// Main configuration structure for the vcap inspector
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Environment variable holding the application descriptor
    #[serde(default = "default_application_key")]
    pub application_key: String,

    /// Environment variable holding the service bindings
    #[serde(default = "default_services_key")]
    pub services_key: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Platform name of the application descriptor variable
pub const APPLICATION_KEY: &str = "VCAP_APPLICATION";

/// Platform name of the service bindings variable
pub const SERVICES_KEY: &str = "VCAP_SERVICES";

fn default_application_key() -> String {
    APPLICATION_KEY.to_string()
}

fn default_services_key() -> String {
    SERVICES_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_key: default_application_key(),
            services_key: default_services_key(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
