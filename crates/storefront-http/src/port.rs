//! Port trait implementations for the resource clients.
//!
//! Implements the core-owned `ProductCatalogPort` and `StockPort` traits,
//! converting internal HTTP errors into core port errors.

use async_trait::async_trait;
use storefront_core::{
    NewProduct, Page, PageRequest, PortError, PortResult, Product, ProductCatalogPort, ProductId,
    ProductPatch, Stock, StockPort,
};

use crate::client::{ProductClient, StockClient};
use crate::error::HttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

const NOT_FOUND_CODE: &str = "NOT_FOUND";

/// Convert internal `HttpError` to core `PortError`.
pub(crate) fn map_error(err: HttpError) -> PortError {
    match err {
        HttpError::Api {
            status,
            code,
            message,
        } => {
            if status == 404 || code.as_deref() == Some(NOT_FOUND_CODE) {
                PortError::NotFound { message }
            } else {
                PortError::BadResponse {
                    status: Some(status),
                    code,
                    message,
                }
            }
        }
        HttpError::Network(e) => PortError::Network {
            message: e.to_string(),
        },
        HttpError::Connection { message } => PortError::Network { message },
        HttpError::InvalidUrl(e) => PortError::ConfigMissing {
            message: e.to_string(),
        },
        HttpError::JsonParse(e) => PortError::InvalidResponse {
            message: e.to_string(),
        },
        HttpError::ConfigMissing { message } => PortError::ConfigMissing { message },
    }
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ProductCatalogPort for ProductClient<B> {
    async fn list(&self, request: &PageRequest) -> PortResult<Page<Product>> {
        self.list_page(request).await.map_err(map_error)
    }

    async fn get(&self, id: ProductId) -> PortResult<Product> {
        self.get_product(id).await.map_err(map_error)
    }

    async fn create(&self, product: &NewProduct) -> PortResult<Product> {
        self.create_product(product).await.map_err(map_error)
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> PortResult<Product> {
        self.update_product(id, patch).await.map_err(map_error)
    }

    async fn remove(&self, id: ProductId) -> PortResult<()> {
        self.delete_product(id).await.map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend> StockPort for StockClient<B> {
    async fn create(&self, product_id: ProductId, quantity: u64) -> PortResult<Stock> {
        self.create_stock(product_id, quantity)
            .await
            .map_err(map_error)
    }

    async fn get(&self, product_id: ProductId) -> PortResult<Stock> {
        self.get_stock(product_id).await.map_err(map_error)
    }

    async fn set(&self, product_id: ProductId, quantity: u64) -> PortResult<Stock> {
        self.set_quantity(product_id, quantity)
            .await
            .map_err(map_error)
    }

    async fn adjust(&self, product_id: ProductId, delta: i64) -> PortResult<Stock> {
        self.adjust_quantity(product_id, delta)
            .await
            .map_err(map_error)
    }
}
