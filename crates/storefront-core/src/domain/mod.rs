//! Domain types for the storefront.
//!
//! These types mirror the backend's JSON shapes (camelCase on the wire) and
//! are shared by every adapter.

mod page;
mod product;
mod stock;

pub use page::{
    DEFAULT_SORT, MAX_PAGE_SIZE, Page, PageRequest, SortDirection, SortField, SortSpec,
    SortSpecError,
};
pub use product::{NewProduct, Product, ProductEdit, ProductId, ProductPatch};
pub use stock::Stock;
