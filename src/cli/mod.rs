//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the console using
//! clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// circdesk - staff circulation console
#[derive(Parser, Debug)]
#[command(name = "circdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "circdesk.toml", env = "CIRCDESK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CIRCDESK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with borrow records
    Borrows(commands::borrows::BorrowsArgs),

    /// Work with fines
    Fines(commands::fines::FinesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::borrows::BorrowsAction;
    use crate::cli::commands::fines::FinesAction;

    #[test]
    fn test_cli_parse_borrows_list() {
        let cli = Cli::parse_from(["circdesk", "borrows", "list"]);
        assert_eq!(cli.config, "circdesk.toml");
        assert!(matches!(
            cli.command,
            Commands::Borrows(ref args) if matches!(args.action, BorrowsAction::List { .. })
        ));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["circdesk", "--config", "custom.toml", "fines", "list"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_borrows_return_with_yes() {
        let cli = Cli::parse_from(["circdesk", "borrows", "return", "3", "--yes"]);
        match cli.command {
            Commands::Borrows(args) => match args.action {
                BorrowsAction::Return { id, yes } => {
                    assert_eq!(id, 3);
                    assert!(yes);
                }
                _ => panic!("expected return action"),
            },
            _ => panic!("expected borrows command"),
        }
    }

    #[test]
    fn test_cli_parse_fines_add() {
        let cli = Cli::parse_from([
            "circdesk", "fines", "add", "--borrow-id", "1", "--user-id", "10", "--amount",
            "12.50", "--reason", "DAMAGE",
        ]);
        match cli.command {
            Commands::Fines(args) => match args.action {
                FinesAction::Add { amount, reason, .. } => {
                    assert_eq!(amount, "12.50");
                    assert_eq!(reason, crate::domain::FineReason::Damage);
                }
                _ => panic!("expected add action"),
            },
            _ => panic!("expected fines command"),
        }
    }

    #[test]
    fn test_cli_parse_fines_list_with_search() {
        let cli = Cli::parse_from(["circdesk", "fines", "list", "--search", "alice", "--page", "2"]);
        match cli.command {
            Commands::Fines(args) => match args.action {
                FinesAction::List { search, page } => {
                    assert_eq!(search, "alice");
                    assert_eq!(page, 2);
                }
                _ => panic!("expected list action"),
            },
            _ => panic!("expected fines command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["circdesk", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["circdesk", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
