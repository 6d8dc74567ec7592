//! Product domain types.

use serde::{Deserialize, Serialize};

/// Server-assigned product identifier.
pub type ProductId = i64;

/// A product as returned by the backend.
///
/// The client only ever holds a transient copy of this record; it is
/// re-fetched after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, server-assigned identifier.
    pub id: ProductId,
    /// Display name (at most 100 characters).
    pub name: String,
    /// Price in the smallest currency unit; always positive.
    pub price: i64,
    /// Optional free-text description (at most 1000 characters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl Product {
    /// Apply a partial update in place. Only `Some` fields change.
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
    }
}

/// Payload for creating a new product.
///
/// The server assigns `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update for a product.
///
/// Only the fields that are `Some` are sent to the backend, and only those
/// fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductPatch {
    /// Compute the minimal patch that turns `current` into `edit`.
    ///
    /// Names and descriptions are compared after trimming; a missing
    /// description and an empty one are considered equal.
    pub fn between(current: &Product, edit: &ProductEdit) -> Self {
        let name = edit.name.trim();
        let description = edit.description.as_deref().map_or("", str::trim);
        let current_description = current.description.as_deref().unwrap_or("");

        Self {
            name: (name != current.name).then(|| name.to_string()),
            price: (edit.price != current.price).then_some(edit.price),
            description: (description != current_description).then(|| description.to_string()),
        }
    }

    /// True when the patch would not change anything.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.description.is_none()
    }
}

/// Replacement values collected by an edit prompt.
///
/// Every field carries a value; [`ProductPatch::between`] reduces it to the
/// fields that actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEdit {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
}

impl From<&Product> for ProductEdit {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
        }
    }
}
