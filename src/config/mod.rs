//! Configuration management for the circulation console.
//!
//! TOML-based configuration loading, parsing and validation with support
//! for environment variable substitution (`${VAR_NAME}`) and `CIRCDESK_*`
//! environment overrides.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use circdesk::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("circdesk.toml")?;
//!
//! println!("Borrow service: {}", config.services.borrows_base_url);
//! println!("Page size: {}", config.view.page_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [services]
//! users_base_url = "http://localhost:8081"
//! books_base_url = "http://localhost:8082"
//! borrows_base_url = "http://localhost:8086"
//! fines_base_url = "http://localhost:8086"
//! username = "staff"
//! password = "${CIRCDESK_SERVICES_PASSWORD}"
//!
//! [view]
//! page_size = 8
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CircdeskConfig, LoggingConfig, RetryConfig, ServicesConfig, ViewConfig,
};
