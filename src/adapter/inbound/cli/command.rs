//! Command-line interface definitions.
//!
//! Defines the CLI structure for the dexfeed application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Stream newly created DEX pools to CSV and Telegram
#[derive(Parser, Debug)]
#[command(name = "dexfeed")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (optional; defaults apply if missing)
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the dexfeed CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listen to the pool feed (foreground, until the connection closes)
    Run(RunArgs),

    /// List supported chains
    Chains,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `dexfeed run`.
///
/// Positional arguments take precedence over the configuration file.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Chain to listen on (ethereum, bnb, arbitrum, polygon, aptos, solana)
    pub chain: Option<String>,

    /// File to append log output to
    pub log_file: Option<PathBuf>,

    /// Override the feed WebSocket URL
    #[arg(long)]
    pub url: Option<String>,

    /// Log level (overrides config)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Append records to this CSV file (enables the CSV sink)
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Subcommands for `dexfeed config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file for correctness.
    Validate,
}
