//! Stock record for a product.

use serde::{Deserialize, Serialize};

use super::product::ProductId;

/// Stock level of a single product (one-to-one with [`super::Product`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub product_id: ProductId,
    /// Units on hand; never negative.
    pub quantity: u64,
    /// Optimistic-locking version maintained by the backend. Passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl Stock {
    pub const fn new(product_id: ProductId, quantity: u64) -> Self {
        Self {
            product_id,
            quantity,
            version: None,
        }
    }
}
