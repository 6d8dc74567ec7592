//! Resource clients for the storefront backend.
//!
//! `connect` resolves the base URL once and hands out a product client and a
//! stock client sharing one transport.

mod products;
mod stocks;

use std::sync::Arc;

use storefront_core::{PortResult, ProductCatalogPort, StockPort};
use tracing::info;

use crate::config::{ClientConfig, resolve_base_url};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::port::map_error;
use crate::transport::Transport;
use crate::url::Endpoint;

pub use products::ProductClient;
pub use stocks::StockClient;

// ============================================================================
// Type Aliases
// ============================================================================

/// Product client using the reqwest HTTP backend.
pub type DefaultProductClient = ProductClient<ReqwestBackend>;

/// Stock client using the reqwest HTTP backend.
pub type DefaultStockClient = StockClient<ReqwestBackend>;

// ============================================================================
// Remote API
// ============================================================================

/// Both resource clients bound to one resolved backend.
pub struct RemoteApi<B: HttpBackend> {
    products: ProductClient<B>,
    stocks: StockClient<B>,
}

impl<B: HttpBackend> RemoteApi<B> {
    pub(crate) fn from_transport(transport: Transport<B>) -> Self {
        Self {
            products: ProductClient::new(transport.clone()),
            stocks: StockClient::new(transport),
        }
    }

    pub const fn products(&self) -> &ProductClient<B> {
        &self.products
    }

    pub const fn stocks(&self) -> &StockClient<B> {
        &self.stocks
    }

    /// Base URL every request goes to.
    pub fn base_url(&self) -> &str {
        self.products.transport().endpoint().base()
    }
}

impl<B: HttpBackend + 'static> RemoteApi<B> {
    /// Split into the two core ports.
    pub fn into_ports(self) -> (Arc<dyn ProductCatalogPort>, Arc<dyn StockPort>) {
        (Arc::new(self.products), Arc::new(self.stocks))
    }
}

/// Connect to the backend described by `config`.
///
/// The base URL is resolved here, once; a missing runtime config value fails
/// with `PortError::ConfigMissing`.
pub async fn connect(config: &ClientConfig) -> PortResult<RemoteApi<ReqwestBackend>> {
    let backend = ReqwestBackend::new(config).map_err(map_error)?;
    connect_with_backend(backend, config).await
}

/// Connect through an arbitrary backend.
pub(crate) async fn connect_with_backend<B: HttpBackend>(
    backend: B,
    config: &ClientConfig,
) -> PortResult<RemoteApi<B>> {
    let base = resolve_base_url(&backend, config.base())
        .await
        .map_err(map_error)?;
    info!(base = %base, prefix = %config.api_prefix(), "Using storefront backend");

    let endpoint = Endpoint::new(base, config.api_prefix());
    Ok(RemoteApi::from_transport(Transport::new(backend, endpoint)))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;
    use storefront_core::PortError;

    pub fn fake_api(backend: FakeBackend) -> RemoteApi<FakeBackend> {
        let endpoint = Endpoint::new("http://localhost:8080", "/api/v1");
        RemoteApi::from_transport(Transport::new(backend, endpoint))
    }

    pub fn product_json(id: i64, name: &str, price: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "price": price,
            "description": null,
            "createdAt": "2024-05-01T10:00:00"
        })
    }

    #[tokio::test]
    async fn test_connect_with_static_base() {
        let config = ClientConfig::with_static_base("http://localhost:9000/");
        let api = connect_with_backend(FakeBackend::new(), &config).await.unwrap();
        assert_eq!(api.base_url(), "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_connect_with_document_base() {
        let backend = FakeBackend::new().with_response(
            "GET https://cdn.example.com/config.json",
            CannedResponse::json(200, json!({"API_BASE": "https://api.example.com"})),
        );
        let config = ClientConfig::from_document("https://cdn.example.com/config.json");

        let api = connect_with_backend(backend, &config).await.unwrap();
        assert_eq!(api.base_url(), "https://api.example.com");
    }

    #[tokio::test]
    async fn test_connect_without_api_base_is_config_missing() {
        let backend = FakeBackend::new()
            .with_response("config.json", CannedResponse::json(200, json!({})));
        let config = ClientConfig::from_document("https://cdn.example.com/config.json");

        let result = connect_with_backend(backend, &config).await;
        assert!(matches!(result, Err(PortError::ConfigMissing { .. })));
    }

    #[test]
    fn test_default_client_creation() {
        let config = ClientConfig::with_static_base("http://localhost:8080");
        assert!(ReqwestBackend::new(&config).is_ok());
    }
}
