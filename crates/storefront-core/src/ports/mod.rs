//! Port definitions (trait abstractions) for the storefront backend.
//!
//! Ports define the interfaces the admin layer expects from a resource API.
//! Two families of implementations exist: the HTTP resource clients in
//! `storefront-http` and the in-memory [`crate::MockStore`].
//!
//! # Design Rules
//!
//! - No HTTP types in any signature
//! - Only domain types cross the boundary
//! - Every failure is a [`PortError`]

pub mod catalog;
pub mod error;
pub mod stock;

pub use catalog::ProductCatalogPort;
pub use error::{PortError, PortResult};
pub use stock::StockPort;
