//! Configuration schema types
//!
//! This module defines the configuration structure for the console.

use secrecy::SecretString;
use serde::Deserialize;

/// Main console configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct CircdeskConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Library service endpoints and credentials
    pub services: ServicesConfig,

    /// List view settings
    #[serde(default)]
    pub view: ViewConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CircdeskConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.services.validate()?;
        self.view.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Library service endpoints and connection settings
///
/// The four collections are owned by independent services, so each gets
/// its own base URL; deployments that co-host collections simply repeat
/// the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the user profile service
    pub users_base_url: String,

    /// Base URL of the catalog service
    pub books_base_url: String,

    /// Base URL of the borrow service
    pub borrows_base_url: String,

    /// Base URL of the fines service
    pub fines_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Username for basic authentication, if the services require it
    #[serde(default)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Retry behavior for read requests
    #[serde(default)]
    pub retry: RetryConfig,
}

impl ServicesConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, url) in [
            ("users_base_url", &self.users_base_url),
            ("books_base_url", &self.books_base_url),
            ("borrows_base_url", &self.borrows_base_url),
            ("fines_base_url", &self.fines_base_url),
        ] {
            if url.trim().is_empty() {
                return Err(format!("{name} must not be empty"));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("{name} must start with http:// or https://"));
            }
        }

        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be greater than 0".to_string());
        }

        if self.username.is_some() != self.password.is_some() {
            return Err(
                "username and password must be provided together or not at all".to_string(),
            );
        }

        self.retry.validate()
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            users_base_url: "http://localhost:8081".to_string(),
            books_base_url: "http://localhost:8082".to_string(),
            borrows_base_url: "http://localhost:8086".to_string(),
            fines_base_url: "http://localhost:8086".to_string(),
            timeout_seconds: default_timeout_seconds(),
            tls_verify: default_tls_verify(),
            username: None,
            password: None,
            retry: RetryConfig::default(),
        }
    }
}

/// Retry configuration for read requests
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Multiplier applied to the delay after each attempt
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Upper bound on the delay in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl RetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_retries == 0 {
            return Err("retry.max_retries must be at least 1".to_string());
        }
        if self.backoff_multiplier < 1.0 {
            return Err("retry.backoff_multiplier must be at least 1.0".to_string());
        }
        Ok(())
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

/// List view settings
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Rows per page in list views
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl ViewConfig {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("view.page_size must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Whether to write JSON logs to a local file
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("local_path must not be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_tls_verify() -> bool {
    true
}

fn default_max_retries() -> usize {
    3
}

fn default_initial_delay_ms() -> u64 {
    500
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_max_delay_ms() -> u64 {
    5_000
}

fn default_page_size() -> usize {
    8
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> CircdeskConfig {
        CircdeskConfig {
            application: ApplicationConfig::default(),
            services: ServicesConfig::default(),
            view: ViewConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = valid_config();
        config.services.fines_base_url = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.contains("fines_base_url"));
    }

    #[test]
    fn test_base_url_without_scheme_rejected() {
        let mut config = valid_config();
        config.services.users_base_url = "localhost:8081".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_username_without_password_rejected() {
        let mut config = valid_config();
        config.services.username = Some("staff".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = valid_config();
        config.view.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = valid_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_page_size_is_eight() {
        assert_eq!(ViewConfig::default().page_size, 8);
    }
}
