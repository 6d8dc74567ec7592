//! Dependency injection for `CatalogController`.
//!
//! All dependencies are injected as trait objects to keep the controller
//! independent of HTTP and of any particular front-end.

use std::sync::Arc;

use storefront_core::{ProductCatalogPort, StockPort};

use crate::view::{Interaction, Presenter};

/// Dependencies required to construct a `CatalogController`.
///
/// # Example
///
/// ```ignore
/// let deps = AdminDeps::new(catalog, presenter, interaction).with_stock(stock);
/// let controller = CatalogController::new(deps);
/// ```
#[derive(Clone)]
pub struct AdminDeps {
    /// Product resource client (HTTP or mock).
    pub(crate) catalog: Arc<dyn ProductCatalogPort>,
    /// Stock resource client; stock features are off without it.
    pub(crate) stock: Option<Arc<dyn StockPort>>,
    pub(crate) presenter: Arc<dyn Presenter>,
    pub(crate) interaction: Arc<dyn Interaction>,
}

impl AdminDeps {
    pub fn new(
        catalog: Arc<dyn ProductCatalogPort>,
        presenter: Arc<dyn Presenter>,
        interaction: Arc<dyn Interaction>,
    ) -> Self {
        Self {
            catalog,
            stock: None,
            presenter,
            interaction,
        }
    }

    #[must_use]
    pub fn with_stock(mut self, stock: Arc<dyn StockPort>) -> Self {
        self.stock = Some(stock);
        self
    }

    pub const fn has_stock(&self) -> bool {
        self.stock.is_some()
    }
}
