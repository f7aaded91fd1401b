//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::PathLength;

/// durablelinks - build and check durable links
#[derive(Parser)]
#[command(name = "durablelinks")]
#[command(version)]
#[command(about = "Build long durable links and check incoming ones", long_about = None)]
pub struct Cli {
    /// Settings file (default: durablelinks.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build a long durable link
    ///
    /// Usage: build <LINK> [options]
    /// - or: build --from-file components.json
    Build(BuildArgs),

    /// Check whether a URL is a durable link for the allowed hosts
    Validate {
        /// URL to check
        url: String,

        /// Allowed host; repeat for several (default: from settings)
        #[arg(long = "allowed-host")]
        allowed_hosts: Vec<String>,
    },

    /// Print the SDK version sent to the backend
    Version,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: durablelinks.example.toml)
        output_path: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// In-app destination link
    #[arg(required_unless_present = "from_file")]
    pub link: Option<String>,

    /// Load components from a JSON or TOML file instead of flags
    #[arg(long, conflicts_with = "link")]
    pub from_file: Option<PathBuf>,

    /// Durable-link domain prefix (default: from settings)
    #[arg(long)]
    pub domain_prefix: Option<String>,

    /// UNGUESSABLE or SHORT
    #[arg(long)]
    pub path_length: Option<PathLength>,

    // Analytics
    #[arg(long)]
    pub utm_source: Option<String>,
    #[arg(long)]
    pub utm_medium: Option<String>,
    #[arg(long)]
    pub utm_campaign: Option<String>,
    #[arg(long)]
    pub utm_term: Option<String>,
    #[arg(long)]
    pub utm_content: Option<String>,

    // Social meta tags
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,

    // iOS
    #[arg(long)]
    pub ios_app_store_id: Option<String>,
    #[arg(long)]
    pub ios_fallback_url: Option<String>,
    #[arg(long)]
    pub ipad_fallback_url: Option<String>,
    #[arg(long)]
    pub ios_minimum_version: Option<String>,

    // Android
    #[arg(long)]
    pub android_package: Option<String>,
    #[arg(long, requires = "android_package")]
    pub android_fallback_url: Option<String>,
    #[arg(long, requires = "android_package")]
    pub android_minimum_version: Option<u32>,

    // iTunes Connect
    #[arg(long)]
    pub affiliate_token: Option<String>,
    #[arg(long)]
    pub campaign_token: Option<String>,
    #[arg(long)]
    pub provider_token: Option<String>,

    /// Fallback for other platforms
    #[arg(long)]
    pub other_fallback_url: Option<String>,
}
