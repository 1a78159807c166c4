//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Shortener - canonicalizing URL shortener
#[derive(Parser, Debug)]
#[command(name = "shortener")]
#[command(version)]
#[command(about = "Shorten URLs with canonical deduplication", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    #[command(flatten)]
    Cli(CliCommands),
}

/// One-shot commands run against the configured store
#[derive(Subcommand, Debug, PartialEq)]
pub enum CliCommands {
    /// Shorten a URL, reusing the existing code for known destinations
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Show the destination stored for a short code
    Resolve {
        /// Short code to look up
        short_url: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,
    },
}
