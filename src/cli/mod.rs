//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod login;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};

/// pitchside - CLI companion for the Bad at Soccer team-selection API
#[derive(Parser, Debug)]
#[command(name = "pitchside")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "PITCHSIDE_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "PITCHSIDE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "PITCHSIDE_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PITCHSIDE_TIMEOUT", hide_env = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PITCHSIDE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and show the server's response
    Login(LoginArgs),

    /// Show configuration status
    Status,

    /// Display version information
    Version,
}

/// Arguments for `pitchside login`
#[derive(clap::Args, Debug, Default)]
pub struct LoginArgs {
    /// Raw credential JSON posted verbatim (any JSON value)
    #[arg(long, conflicts_with_all = ["gmail", "remember"])]
    pub data: Option<String>,

    /// Account email (defaults to the remembered one, else prompts)
    #[arg(long)]
    pub gmail: Option<String>,

    /// Account password (prompts when omitted)
    #[arg(long, env = "PITCHSIDE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Remember the email in the config file (the password is never stored)
    #[arg(long)]
    pub remember: bool,
}
