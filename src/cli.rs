//! Command-line interface definitions using clap
//!
//! Mode selection for the single binary: server (default) or client.

use clap::{Parser, Subcommand};

/// geovision - IP geolocation lookup proxy and client
#[derive(Parser)]
#[command(name = "geovision")]
#[command(version)]
#[command(about = "IP geolocation lookup proxy and client", long_about = None)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the lookup proxy (default when no command is given)
    Server,

    /// Run the interactive lookup client
    Client,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_server_mode() {
        let cli = Cli::parse_from(["geovision"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_client_subcommand() {
        let cli = Cli::parse_from(["geovision", "client"]);
        assert!(matches!(cli.command, Some(Commands::Client)));
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::parse_from(["geovision", "client", "-c", "custom.toml"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }
}
