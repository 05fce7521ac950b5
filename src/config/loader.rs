//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CircdeskConfig;
use crate::domain::errors::CircdeskError;
use crate::domain::result::Result;
use regex::Regex;
use secrecy::SecretString;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`CircdeskConfig`]
/// 4. Applies environment variable overrides (`CIRCDESK_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use circdesk::config::load_config;
///
/// let config = load_config("circdesk.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CircdeskConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CircdeskError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CircdeskError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: CircdeskConfig = toml::from_str(&contents)
        .map_err(|e| CircdeskError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        CircdeskError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched so examples in the sample config do
/// not have to exist in the environment.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CircdeskError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `CIRCDESK_*` prefix
///
/// Variables follow the pattern `CIRCDESK_<SECTION>_<KEY>`, for example
/// `CIRCDESK_SERVICES_BORROWS_BASE_URL` or `CIRCDESK_VIEW_PAGE_SIZE`.
fn apply_env_overrides(config: &mut CircdeskConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("CIRCDESK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Service endpoint overrides
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_USERS_BASE_URL") {
        config.services.users_base_url = val;
    }
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_BOOKS_BASE_URL") {
        config.services.books_base_url = val;
    }
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_BORROWS_BASE_URL") {
        config.services.borrows_base_url = val;
    }
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_FINES_BASE_URL") {
        config.services.fines_base_url = val;
    }
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.services.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_TLS_VERIFY") {
        config.services.tls_verify = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_USERNAME") {
        config.services.username = Some(val);
    }
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_PASSWORD") {
        config.services.password = Some(SecretString::new(val));
    }

    // Retry overrides
    if let Ok(val) = std::env::var("CIRCDESK_SERVICES_RETRY_MAX_RETRIES") {
        if let Ok(retries) = val.parse() {
            config.services.retry.max_retries = retries;
        }
    }

    // View overrides
    if let Ok(val) = std::env::var("CIRCDESK_VIEW_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.view.page_size = size;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CIRCDESK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CIRCDESK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
