//! Stock port (one stock record per product).

use async_trait::async_trait;

use super::error::PortResult;
use crate::domain::{ProductId, Stock};

/// Port trait for stock operations.
#[async_trait]
pub trait StockPort: Send + Sync {
    /// Create the stock record for an existing product.
    async fn create(&self, product_id: ProductId, quantity: u64) -> PortResult<Stock>;

    /// Fetch the stock record of a product.
    async fn get(&self, product_id: ProductId) -> PortResult<Stock>;

    /// Set the quantity to an absolute value.
    async fn set(&self, product_id: ProductId, quantity: u64) -> PortResult<Stock>;

    /// Apply a signed delta to the quantity.
    async fn adjust(&self, product_id: ProductId, delta: i64) -> PortResult<Stock>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn _assert_object_safe(_: Arc<dyn StockPort>) {}
}
