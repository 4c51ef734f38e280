//! Global CLI options shared across all commands

use std::time::Duration;

use crate::cli::{Cli, OutputFormat};
use crate::client::TransportSettings;
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; [`GlobalOptions::transport_settings`] merges in
/// the config file.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.pitchside/config.yaml)
    pub config: Option<String>,

    /// API host override
    pub api_host: Option<String>,

    /// Request timeout override in seconds
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
            timeout: cli.timeout,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// Resolve transport settings against a loaded config
    pub fn transport_settings(&self, config: &Config) -> TransportSettings {
        TransportSettings {
            api_host: config.api_host_or(self.api_host_ref()),
            timeout: Duration::from_secs(config.timeout_or(self.timeout)),
        }
    }
}
