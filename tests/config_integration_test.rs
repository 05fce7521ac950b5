//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables are serialized through a
//! mutex to avoid interference between tests.

use circdesk::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("CIRCDESK_APPLICATION_LOG_LEVEL");
    std::env::remove_var("CIRCDESK_SERVICES_BORROWS_BASE_URL");
    std::env::remove_var("CIRCDESK_VIEW_PAGE_SIZE");
    std::env::remove_var("CIRCDESK_TEST_STAFF_PASSWORD");
}

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"

[services]
users_base_url = "https://users.library.example.com"
books_base_url = "https://catalog.library.example.com"
borrows_base_url = "https://borrows.library.example.com"
fines_base_url = "https://borrows.library.example.com"
timeout_seconds = 15
tls_verify = true

[services.retry]
max_retries = 5
initial_delay_ms = 250
backoff_multiplier = 1.5
max_delay_ms = 2000

[view]
page_size = 12

[logging]
local_enabled = false
local_path = "/tmp/circdesk"
local_rotation = "hourly"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(
        config.services.users_base_url,
        "https://users.library.example.com"
    );
    assert_eq!(config.services.timeout_seconds, 15);
    assert_eq!(config.services.retry.max_retries, 5);
    assert_eq!(config.view.page_size, 12);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_var_substitution_in_credentials() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("CIRCDESK_TEST_STAFF_PASSWORD", "hunter2");

    let toml_content = r#"
[services]
users_base_url = "http://localhost:8081"
books_base_url = "http://localhost:8082"
borrows_base_url = "http://localhost:8086"
fines_base_url = "http://localhost:8086"
username = "staff"
password = "${CIRCDESK_TEST_STAFF_PASSWORD}"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).unwrap();

    use secrecy::ExposeSecret;
    assert_eq!(config.services.username.as_deref(), Some("staff"));
    assert_eq!(
        config.services.password.as_ref().unwrap().expose_secret(),
        "hunter2"
    );

    cleanup_env_vars();
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("CIRCDESK_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var(
        "CIRCDESK_SERVICES_BORROWS_BASE_URL",
        "http://borrows.internal:9000",
    );
    std::env::set_var("CIRCDESK_VIEW_PAGE_SIZE", "20");

    let toml_content = r#"
[application]
log_level = "info"

[services]
users_base_url = "http://localhost:8081"
books_base_url = "http://localhost:8082"
borrows_base_url = "http://localhost:8086"
fines_base_url = "http://localhost:8086"

[view]
page_size = 8
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(
        config.services.borrows_base_url,
        "http://borrows.internal:9000"
    );
    assert_eq!(config.view.page_size, 20);

    cleanup_env_vars();
}

#[test]
fn test_validation_failure_surfaces_field_name() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[services]
users_base_url = "http://localhost:8081"
books_base_url = "http://localhost:8082"
borrows_base_url = "localhost-without-scheme"
fines_base_url = "http://localhost:8086"
"#;

    let temp_file = write_temp_config(toml_content);
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("borrows_base_url"));
}

#[test]
fn test_missing_services_section_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_temp_config("[application]\nlog_level = \"info\"\n");
    assert!(load_config(temp_file.path()).is_err());
}
