//! Core domain for the storefront admin client.
//!
//! This crate owns the data model (products, stock, pages), the client-side
//! validation rules, the port traits that resource clients implement, and the
//! in-memory [`MockStore`] used when no backend is configured.
//!
//! It has no knowledge of HTTP or terminals; adapters live in
//! `storefront-http`, `storefront-admin` and `storefront-cli`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod mock_store;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    DEFAULT_SORT, MAX_PAGE_SIZE, NewProduct, Page, PageRequest, Product, ProductEdit, ProductId,
    ProductPatch, SortDirection, SortField, SortSpec, SortSpecError, Stock,
};
pub use mock_store::MockStore;
pub use ports::{PortError, PortResult, ProductCatalogPort, StockPort};
pub use validation::{
    DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS, ProductForm, ValidatedProduct, ValidationError,
    validate_patch, validate_product_form,
};
