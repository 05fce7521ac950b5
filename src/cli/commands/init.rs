//! Init command implementation
//!
//! Generates a commented sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "circdesk.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing circdesk configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your service endpoints", self.output);
                println!("  2. Set CIRCDESK_SERVICES_PASSWORD if the services need credentials");
                println!("  3. Validate configuration: circdesk validate-config");
                println!("  4. List borrow records: circdesk borrows list");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

/// Sample configuration written by `circdesk init`
const SAMPLE_CONFIG: &str = r#"# circdesk configuration
# Staff circulation console for the library services platform

[application]
log_level = "info"

[services]
users_base_url = "http://localhost:8081"
books_base_url = "http://localhost:8082"
borrows_base_url = "http://localhost:8086"
fines_base_url = "http://localhost:8086"
timeout_seconds = 30
tls_verify = true

# Basic authentication, if the services require it:
# username = "staff"
# password = "${CIRCDESK_SERVICES_PASSWORD}"

[services.retry]
max_retries = 3
initial_delay_ms = 500
backoff_multiplier = 2.0
max_delay_ms = 5000

[view]
page_size = 8

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#;
