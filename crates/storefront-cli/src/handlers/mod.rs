//! Command handlers, one module per subcommand.
//!
//! Handlers drive the [`CatalogController`] held by the CLI context.
//! Failures have already been shown by the presenter when they come back,
//! so handlers only propagate them for the exit code.
//!
//! [`CatalogController`]: storefront_admin::CatalogController

pub mod browse;
pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;
pub mod stock;
