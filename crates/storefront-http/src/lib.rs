//! HTTP adapter for the storefront backend.
//!
//! Resolves the backend base URL (fixed or from a runtime config document),
//! sends every request through one transport that merges headers and unwraps
//! the `{success, data, error}` envelope, and exposes the product and stock
//! clients through the core port traits.
//!
//! ```no_run
//! # async fn run() -> storefront_core::PortResult<()> {
//! use storefront_http::{ClientConfig, connect};
//!
//! let api = connect(&ClientConfig::with_static_base("http://localhost:8080")).await?;
//! let (catalog, stock) = api.into_ports();
//! # let _ = (catalog, stock);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// RemoteApi<ReqwestBackend> is meant to be used through the port traits,
// not its generic structure
#![allow(private_interfaces, private_bounds)]

mod client;
mod config;
mod envelope;
mod error;
mod http;
mod port;
mod transport;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use client::{
    DefaultProductClient, DefaultStockClient, ProductClient, RemoteApi, StockClient, connect,
};

// Configuration
pub use config::{API_BASE_KEY, ApiBaseSource, ClientConfig, DEFAULT_API_PREFIX};

// Backend
pub use http::ReqwestBackend;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
