//! Stock operations for the catalog controller.

use std::collections::HashMap;
use std::sync::Arc;

use storefront_core::{PortError, Product, ProductId, Stock, StockPort};
use tracing::debug;

use crate::deps::AdminDeps;
use crate::error::AdminError;
use crate::loading::LoadingTracker;

/// Stock operations handler.
pub struct StockOps<'a> {
    deps: &'a AdminDeps,
    loading: &'a LoadingTracker,
}

impl<'a> StockOps<'a> {
    pub const fn new(deps: &'a AdminDeps, loading: &'a LoadingTracker) -> Self {
        Self { deps, loading }
    }

    fn port(&self) -> Result<&Arc<dyn StockPort>, AdminError> {
        self.deps.stock.as_ref().ok_or(AdminError::StockUnavailable)
    }

    pub async fn create(&self, product_id: ProductId, quantity: u64) -> Result<Stock, AdminError> {
        let port = self.port()?;
        let _loading = self.loading.begin();
        Ok(port.create(product_id, quantity).await?)
    }

    /// Stock record of a product; a missing record is `None`, not an error.
    pub async fn find(&self, product_id: ProductId) -> Result<Option<Stock>, AdminError> {
        let Some(port) = self.deps.stock.as_ref() else {
            return Ok(None);
        };
        let _loading = self.loading.begin();
        match port.get(product_id).await {
            Ok(stock) => Ok(Some(stock)),
            Err(PortError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn set(&self, product_id: ProductId, quantity: u64) -> Result<Stock, AdminError> {
        let port = self.port()?;
        let _loading = self.loading.begin();
        Ok(port.set(product_id, quantity).await?)
    }

    pub async fn adjust(&self, product_id: ProductId, delta: i64) -> Result<Stock, AdminError> {
        let port = self.port()?;
        let _loading = self.loading.begin();
        Ok(port.adjust(product_id, delta).await?)
    }

    /// Quantities for the given products. Lookups that fail are left out.
    pub async fn quantities(&self, products: &[Product]) -> HashMap<ProductId, u64> {
        let mut quantities = HashMap::new();
        let Some(port) = self.deps.stock.as_ref() else {
            return quantities;
        };

        let _loading = self.loading.begin();
        for product in products {
            match port.get(product.id).await {
                Ok(stock) => {
                    quantities.insert(product.id, stock.quantity);
                }
                Err(e) => debug!(id = product.id, error = %e, "No stock for product"),
            }
        }
        quantities
    }
}
