//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Ashraya using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Ashraya - care facility record keeping
#[derive(Parser, Debug)]
#[command(name = "ashraya")]
#[command(version, about, long_about = None)]
#[command(author = "Ashraya Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ashraya.toml", env = "ASHRAYA_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ASHRAYA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show dashboard statistics for the demo store
    Stats(commands::stats::StatsArgs),

    /// Search patients in the demo store
    Search(commands::search::SearchArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::parse_from(["ashraya", "stats"]);
        assert_eq!(cli.config, "ashraya.toml");
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["ashraya", "--config", "custom.toml", "stats"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["ashraya", "--log-level", "debug", "stats"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["ashraya", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["ashraya", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_search_with_mode() {
        let cli = Cli::parse_from(["ashraya", "search", "--mode", "age", "78"]);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, "78");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
