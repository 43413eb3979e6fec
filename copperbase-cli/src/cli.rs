//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Copperbase -- API playground for the Copperbase platform.
///
/// Use `copperbase <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "copperbase", version, about, long_about = None)]
pub struct Cli {
    /// Path to the copperbase.toml configuration file.
    #[arg(short, long, default_value = "copperbase.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full playground sequence against the remote service.
    Run(RunArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- run ----

/// Run the playground sequence.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Override the API endpoint from the config file.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the project identifier.
    #[arg(long)]
    pub project: Option<String>,

    /// Override the API key.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the local file used by the upload step.
    #[arg(long)]
    pub upload_path: Option<PathBuf>,

    /// Skip the schema propagation wait before index creation.
    #[arg(long)]
    pub no_wait: bool,
}

// ---- config ----

/// Manage copperbase configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (connection, general, playground).
        #[arg(long)]
        section: Option<String>,
    },
}
