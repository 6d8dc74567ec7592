//! Terminal front-end for the storefront product catalog.
//!
//! The `storefront` binary wires the HTTP clients (or the in-memory demo
//! catalog) into the catalog controller and drives it from clap commands or
//! an interactive `browse` session.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod interaction;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{BackendKind, CliConfig, CliContext, bootstrap};
pub use commands::{Commands, StockCommand};
pub use error::CliError;
pub use interaction::StdinInteraction;
pub use parser::Cli;
pub use presentation::TerminalPresenter;
