//! Catalog view controller for storefront front-ends.
//!
//! [`CatalogController`] owns the paging state and the loaded page, runs the
//! product and stock commands against the core ports and talks to the
//! front-end only through the [`Presenter`] and [`Interaction`] traits. It
//! knows nothing about HTTP or terminals.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod controller;
mod deps;
mod error;
mod loading;
mod products;
mod state;
mod stock;
mod view;

#[cfg(test)]
mod test_support;

pub use controller::CatalogController;
pub use deps::AdminDeps;
pub use error::{AdminError, DeleteOutcome, EditOutcome, RefreshOutcome};
pub use state::{DEFAULT_PAGE_SIZE, PagingState};
pub use view::{Interaction, ListView, Notice, NoticeLevel, Presenter, ProductDetail};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
