//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so reaching Ok means both passed
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Users Service: {}", config.services.users_base_url);
        println!("  Books Service: {}", config.services.books_base_url);
        println!("  Borrows Service: {}", config.services.borrows_base_url);
        println!("  Fines Service: {}", config.services.fines_base_url);
        println!(
            "  Authentication: {}",
            if config.services.username.is_some() {
                "basic"
            } else {
                "none"
            }
        );
        println!("  Request Timeout: {}s", config.services.timeout_seconds);
        println!("  Page Size: {}", config.view.page_size);
        println!();
        Ok(0)
    }
}
