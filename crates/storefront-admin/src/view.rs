//! Presentation-facing types and the collaborator traits the controller
//! talks to.
//!
//! A front-end implements [`Presenter`] (rendering, notifications, loading
//! indicator) and [`Interaction`] (confirmations, edit prompts).

use std::collections::HashMap;

use async_trait::async_trait;
use storefront_core::{Page, Product, ProductEdit, ProductId, Stock};

use crate::state::PagingState;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient message for the user (toast, status line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Snapshot of the listing handed to the presenter after every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub page: Page<Product>,
    pub paging: PagingState,
    /// Stock on hand per product; products without a stock record are absent.
    pub quantities: HashMap<ProductId, u64>,
}

impl ListView {
    /// Quantity shown for a product; no stock record reads as zero.
    pub fn quantity(&self, id: ProductId) -> u64 {
        self.quantities.get(&id).copied().unwrap_or(0)
    }

    pub const fn has_previous(&self) -> bool {
        self.page.has_previous()
    }

    pub const fn has_next(&self) -> bool {
        self.page.has_next()
    }

    /// One-based position, e.g. `Page 2 / 5 · 93 items`.
    pub fn summary(&self) -> String {
        format!(
            "Page {} / {} · {} items",
            self.page.number + 1,
            self.page.total_pages.max(1),
            self.page.total_elements
        )
    }
}

/// A product together with its stock record, if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub product: Product,
    pub stock: Option<Stock>,
}

/// Output side of the front-end.
pub trait Presenter: Send + Sync {
    /// Show the current page.
    fn render(&self, view: &ListView);

    /// Show a transient notification.
    fn notify(&self, notice: &Notice);

    /// Show or hide the global loading indicator.
    fn set_loading(&self, loading: bool);
}

/// Input side of the front-end.
#[async_trait]
pub trait Interaction: Send + Sync {
    /// Ask a yes/no question. `false` aborts the operation.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Ask for replacement values, pre-filled with the current ones.
    ///
    /// `None` means the user cancelled.
    async fn edit_product(&self, current: &Product) -> Option<ProductEdit>;
}
