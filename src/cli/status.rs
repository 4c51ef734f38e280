//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Formattable, json::format_json, pretty::field_row};

/// Resolved configuration as the login command would see it
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub config_path: String,
    pub config_exists: bool,
    pub api_host: String,
    pub timeout_secs: u64,
    pub gmail: Option<String>,
}

impl StatusReport {
    /// Resolve config file and overrides into a report
    pub fn collect(opts: &GlobalOptions) -> Result<Self> {
        let path = Config::resolve_path(opts.config_ref())?;
        let config_exists = path.exists();
        let config = Config::load_or_default_at(opts.config_ref())?;

        Ok(Self {
            config_path: path.display().to_string(),
            config_exists,
            api_host: config.api_host_or(opts.api_host_ref()),
            timeout_secs: config.timeout_or(opts.timeout),
            gmail: config.gmail,
        })
    }
}

impl Formattable for StatusReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Pretty => {
                let mut lines = vec![format!("{}\n", "pitchside Configuration Status".bold())];

                let marker = if self.config_exists {
                    "✓".green()
                } else {
                    "✗".red()
                };
                lines.push(format!("Config file: {} {}", self.config_path.cyan(), marker));
                if !self.config_exists {
                    lines.push("  → Using defaults".to_string());
                }

                lines.push(field_row("API host", Some(self.api_host.as_str())));
                lines.push(field_row("Timeout", Some(format!("{}s", self.timeout_secs).as_str())));
                lines.push(field_row("Remembered email", self.gmail.as_deref()));

                Ok(lines.join("\n"))
            }
        }
    }
}

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let report = StatusReport::collect(opts)?;
    output::print(&report, opts.format)
}
