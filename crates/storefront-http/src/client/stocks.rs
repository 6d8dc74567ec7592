//! Stock resource client.

use serde::Serialize;
use storefront_core::{ProductId, Stock};

use crate::error::HttpResult;
use crate::http::HttpBackend;
use crate::transport::{RequestBody, RequestOptions, Transport};
use crate::url::{stock_adjust_path, stock_path};

#[derive(Serialize)]
struct QuantityBody {
    quantity: u64,
}

#[derive(Serialize)]
struct DeltaBody {
    delta: i64,
}

/// Client for `/stocks/{productId}`.
pub struct StockClient<B: HttpBackend> {
    transport: Transport<B>,
}

impl<B: HttpBackend> StockClient<B> {
    pub(crate) const fn new(transport: Transport<B>) -> Self {
        Self { transport }
    }

    pub(crate) async fn create_stock(
        &self,
        product_id: ProductId,
        quantity: u64,
    ) -> HttpResult<Stock> {
        let body = RequestBody::json(&QuantityBody { quantity })?;
        self.transport
            .request(&stock_path(product_id), RequestOptions::post(body))
            .await
    }

    pub(crate) async fn get_stock(&self, product_id: ProductId) -> HttpResult<Stock> {
        self.transport
            .request(&stock_path(product_id), RequestOptions::get())
            .await
    }

    pub(crate) async fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: u64,
    ) -> HttpResult<Stock> {
        let body = RequestBody::json(&QuantityBody { quantity })?;
        self.transport
            .request(&stock_path(product_id), RequestOptions::put(body))
            .await
    }

    pub(crate) async fn adjust_quantity(
        &self,
        product_id: ProductId,
        delta: i64,
    ) -> HttpResult<Stock> {
        let body = RequestBody::json(&DeltaBody { delta })?;
        self.transport
            .request(&stock_adjust_path(product_id), RequestOptions::patch(body))
            .await
    }
}
