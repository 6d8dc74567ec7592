//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for administering a storefront product catalog.
///
/// Without `--api-base` or `--config-url` every command runs against an
/// in-memory demo catalog.
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Manage storefront products and stock")]
#[command(version)]
pub struct Cli {
    /// Backend base URL, e.g. http://localhost:8080
    #[arg(long = "api-base", env = "API_BASE_URL", global = true)]
    pub api_base: Option<String>,

    /// URL of a JSON config document carrying the base URL under `API_BASE`;
    /// ignored when `--api-base` is also given
    #[arg(long = "config-url", env = "STOREFRONT_CONFIG_URL", global = true)]
    pub config_url: Option<String>,

    /// Path prefix placed before every resource path
    #[arg(long = "api-prefix", global = true)]
    pub api_prefix: Option<String>,

    /// Products per page
    #[arg(long = "page-size", global = true)]
    pub page_size: Option<u32>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
