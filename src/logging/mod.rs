//! Logging and observability
//!
//! Structured logging with configurable levels, console output and
//! optional JSON file logging with rotation.
//!
//! # Example
//!
//! ```no_run
//! use circdesk::config::LoggingConfig;
//! use circdesk::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Console started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
