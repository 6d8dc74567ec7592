//! Product catalog port.

use async_trait::async_trait;

use super::error::PortResult;
use crate::domain::{NewProduct, Page, PageRequest, Product, ProductId, ProductPatch};

/// Port trait for product operations.
///
/// Implemented by the HTTP product client (`storefront-http`) and by
/// [`crate::MockStore`].
#[async_trait]
pub trait ProductCatalogPort: Send + Sync {
    /// Fetch one page of products.
    async fn list(&self, request: &PageRequest) -> PortResult<Page<Product>>;

    /// Fetch a single product. Fails with `PortError::NotFound` when absent.
    async fn get(&self, id: ProductId) -> PortResult<Product>;

    /// Create a product; the implementation assigns id and timestamp.
    async fn create(&self, product: &NewProduct) -> PortResult<Product>;

    /// Apply a partial update. Only supplied fields change.
    async fn update(&self, id: ProductId, patch: &ProductPatch) -> PortResult<Product>;

    /// Delete a product.
    async fn remove(&self, id: ProductId) -> PortResult<()>;
}
