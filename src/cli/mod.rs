//! CLI interface module
//!
//! Offline helpers around the library: build long links, check incoming
//! ones, print the SDK version and generate a settings file.

pub mod commands;
pub mod parser;

pub use parser::{BuildArgs, Cli, Commands, ConfigCommands};

use std::fmt;

use colored::Colorize;

use crate::client::DurableLinks;
use crate::config::{DEFAULT_CONFIG_PATH, Settings};
use crate::errors::DurableLinksError;

#[derive(Debug)]
pub enum CliError {
    ParseError(String),
    FileError(String),
    ConfigError(String),
    Link(DurableLinksError),
    /// `validate` found the URL is not a durable link
    NotDurableLink(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::FileError(msg) => format!("File error: {}", msg),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::Link(err) => err.format_simple(),
            CliError::NotDurableLink(url) => format!("Not a durable link: {}", url),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::FileError(msg) => {
                format!("{} {}", "File error:".red().bold(), msg.white())
            }
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".red().bold(), msg.white())
            }
            CliError::Link(err) => err.format_colored(),
            CliError::NotDurableLink(url) => {
                format!("{} {}", "Not a durable link:".red().bold(), url.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<DurableLinksError> for CliError {
    fn from(err: DurableLinksError) -> Self {
        CliError::Link(err)
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}

/// Load settings from `--config`, or the default file when present.
pub fn load_settings(path: Option<&std::path::Path>) -> Result<Settings, CliError> {
    match path {
        Some(path) if !path.exists() => Err(CliError::FileError(format!(
            "{}: settings file not found",
            path.display()
        ))),
        Some(path) => Ok(Settings::load_from(path)?),
        None => Ok(Settings::load_from(DEFAULT_CONFIG_PATH)?),
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(command: Commands, settings: &Settings) -> Result<(), CliError> {
    match command {
        Commands::Build(args) => {
            let url = commands::build_link(args, settings)?;
            println!("{}", url);
        }
        Commands::Validate { url, allowed_hosts } => {
            if !commands::validate_link(&url, allowed_hosts, settings)? {
                return Err(CliError::NotDurableLink(url));
            }
            println!("{} {}", "✓".green().bold(), url);
        }
        Commands::Version => {
            let links = DurableLinks::from_settings(settings)?;
            println!("{}", links.sdk_version());
        }
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path } => {
                let path = commands::generate_config(output_path)?;
                println!("{} {}", "Sample settings written to".green(), path.cyan());
            }
        },
    }
    Ok(())
}
