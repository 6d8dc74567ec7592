//! `CatalogController` - the catalog view-model and command facade.
//!
//! Holds the paging state and the last loaded page, runs every user command
//! against the injected ports and reports the result through the presenter.
//! Every failure is shown as a notification and the previous view is kept.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use storefront_core::{
    Page, Product, ProductForm, ProductId, ProductPatch, SortSpec, Stock, validate_patch,
    validate_product_form,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::deps::AdminDeps;
use crate::error::{AdminError, DeleteOutcome, EditOutcome, RefreshOutcome};
use crate::loading::LoadingTracker;
use crate::products::ProductOps;
use crate::state::PagingState;
use crate::stock::StockOps;
use crate::view::{ListView, Notice, ProductDetail};

#[derive(Debug, Default)]
struct ViewState {
    paging: PagingState,
    page: Option<Page<Product>>,
    quantities: HashMap<ProductId, u64>,
}

/// Catalog view controller.
///
/// # Construction
///
/// ```ignore
/// let deps = AdminDeps::new(catalog, presenter, interaction).with_stock(stock);
/// let controller = CatalogController::with_page_size(deps, 10);
/// controller.refresh().await?;
/// ```
pub struct CatalogController {
    deps: AdminDeps,
    view: RwLock<ViewState>,
    /// Ticket of the most recent refresh; older responses are dropped.
    generation: AtomicU64,
    loading: LoadingTracker,
}

impl CatalogController {
    /// Controller on the first page with the default size and sort.
    pub fn new(deps: AdminDeps) -> Self {
        Self::with_paging(deps, PagingState::default())
    }

    pub fn with_page_size(deps: AdminDeps, size: u32) -> Self {
        Self::with_paging(deps, PagingState::new(size))
    }

    pub fn with_paging(deps: AdminDeps, paging: PagingState) -> Self {
        let loading = LoadingTracker::new(deps.presenter.clone());
        Self {
            deps,
            view: RwLock::new(ViewState {
                paging,
                ..ViewState::default()
            }),
            generation: AtomicU64::new(0),
            loading,
        }
    }

    // Accessors for ops modules
    const fn product_ops(&self) -> ProductOps<'_> {
        ProductOps::new(&self.deps, &self.loading)
    }

    const fn stock_ops(&self) -> StockOps<'_> {
        StockOps::new(&self.deps, &self.loading)
    }

    pub async fn paging(&self) -> PagingState {
        self.view.read().await.paging
    }

    /// The last successfully loaded page, if any.
    pub async fn current_page(&self) -> Option<Page<Product>> {
        self.view.read().await.page.clone()
    }

    /// Current listing as last rendered.
    pub async fn list_view(&self) -> Option<ListView> {
        let view = self.view.read().await;
        view.page.as_ref().map(|page| ListView {
            page: page.clone(),
            paging: view.paging,
            quantities: view.quantities.clone(),
        })
    }

    pub const fn has_stock(&self) -> bool {
        self.deps.has_stock()
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    fn notify(&self, notice: &Notice) {
        self.deps.presenter.notify(notice);
    }

    /// Show a failure and hand the error back for propagation.
    fn fail(&self, action: &str, err: impl Into<AdminError>) -> AdminError {
        let err = err.into();
        let message = if err.is_validation() {
            err.to_string()
        } else {
            format!("{action} failed: {err}")
        };
        warn!(action, error = %err, "Catalog operation failed");
        self.notify(&Notice::error(message));
        err
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Fetch the current page and render it.
    ///
    /// When refreshes overlap, only the most recently started one is applied.
    pub async fn refresh(&self) -> Result<RefreshOutcome, AdminError> {
        let paging = self.paging().await;
        self.load(paging).await
    }

    /// Fetch the page `paging` points at and make it current.
    ///
    /// `paging` is committed only together with the page it loaded; on failure
    /// the view keeps its previous paging and page.
    async fn load(&self, paging: PagingState) -> Result<RefreshOutcome, AdminError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = paging.request();

        let result = self.product_ops().list(&request).await;
        let result = match result {
            Ok(page) => {
                let quantities = self.stock_ops().quantities(&page.content).await;
                Ok((page, quantities))
            }
            Err(e) => Err(e),
        };

        let mut view = self.view.write().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "Discarding stale listing response");
            return Ok(RefreshOutcome::Stale);
        }

        match result {
            Ok((page, quantities)) => {
                view.paging = PagingState {
                    page: page.number,
                    ..paging
                };
                let snapshot = ListView {
                    page: page.clone(),
                    paging: view.paging,
                    quantities: quantities.clone(),
                };
                view.page = Some(page);
                view.quantities = quantities;
                drop(view);

                self.deps.presenter.render(&snapshot);
                Ok(RefreshOutcome::Applied)
            }
            Err(e) => {
                drop(view);
                Err(self.fail("List load", e))
            }
        }
    }

    /// Refresh after a mutation; a failure is already shown to the user.
    async fn reload(&self) {
        if let Err(e) = self.refresh().await {
            debug!(error = %e, "Reload after mutation failed");
        }
    }

    pub async fn go_to_page(&self, page: u32) -> Result<RefreshOutcome, AdminError> {
        let mut paging = self.paging().await;
        paging.go_to(page);
        self.load(paging).await
    }

    /// Go back one page, if there is one.
    pub async fn previous_page(&self) -> Result<RefreshOutcome, AdminError> {
        let mut paging = self.paging().await;
        if !paging.previous() {
            return Ok(RefreshOutcome::Skipped);
        }
        self.load(paging).await
    }

    /// Go forward one page, if there is one.
    pub async fn next_page(&self) -> Result<RefreshOutcome, AdminError> {
        let (mut paging, total_pages) = {
            let view = self.view.read().await;
            let total_pages = view.page.as_ref().map_or(1, |page| page.total_pages);
            (view.paging, total_pages)
        };
        if !paging.next(total_pages) {
            return Ok(RefreshOutcome::Skipped);
        }
        self.load(paging).await
    }

    pub async fn set_page_size(&self, size: u32) -> Result<RefreshOutcome, AdminError> {
        let mut paging = self.paging().await;
        paging.set_size(size);
        self.load(paging).await
    }

    pub async fn set_sort(&self, sort: SortSpec) -> Result<RefreshOutcome, AdminError> {
        let mut paging = self.paging().await;
        paging.set_sort(sort);
        self.load(paging).await
    }

    // =========================================================================
    // Product commands
    // =========================================================================

    /// Validate and create a product, plus its stock record when an initial
    /// quantity above zero is given. Goes back to the first page afterwards.
    pub async fn create(&self, form: &ProductForm) -> Result<Product, AdminError> {
        let validated = validate_product_form(form).map_err(|e| self.fail("Create", e))?;

        let product = self
            .product_ops()
            .create(&validated.product)
            .await
            .map_err(|e| self.fail("Create", e))?;

        let stock = match validated.initial_stock {
            Some(quantity) if quantity > 0 && self.has_stock() => {
                Some(self.stock_ops().create(product.id, quantity).await)
            }
            Some(quantity) if quantity > 0 => {
                warn!(id = product.id, quantity, "No stock service, initial stock ignored");
                None
            }
            _ => None,
        };

        info!(id = product.id, name = %product.name, "Product created");
        self.notify(&Notice::success(format!("Created #{}", product.id)));
        let mut first = self.paging().await;
        first.reset_to_first();
        if let Err(e) = self.load(first).await {
            debug!(error = %e, "Reload after create failed");
        }

        match stock {
            Some(Err(e)) => Err(self.fail("Stock creation", e)),
            _ => Ok(product),
        }
    }

    /// Edit a product through the interaction prompt.
    ///
    /// Only changed fields are sent; when nothing changed no request is made.
    pub async fn edit(&self, id: ProductId) -> Result<EditOutcome, AdminError> {
        let loaded = self.current_page().await;
        let current = self
            .product_ops()
            .resolve(id, loaded.as_ref())
            .await
            .map_err(|e| self.fail("Update", e))?;

        let Some(edit) = self.deps.interaction.edit_product(&current).await else {
            return Ok(EditOutcome::Cancelled);
        };

        let patch = ProductPatch::between(&current, &edit);
        if patch.is_empty() {
            self.notify(&Notice::info("No changes"));
            return Ok(EditOutcome::Unchanged);
        }
        validate_patch(&patch).map_err(|e| self.fail("Update", e))?;

        let updated = self
            .product_ops()
            .update(id, &patch)
            .await
            .map_err(|e| self.fail("Update", e))?;

        info!(id, "Product updated");
        self.notify(&Notice::success("Updated"));
        self.reload().await;
        Ok(EditOutcome::Updated(updated))
    }

    /// Delete a product after confirmation.
    pub async fn delete(&self, id: ProductId) -> Result<DeleteOutcome, AdminError> {
        let confirmed = self
            .deps
            .interaction
            .confirm(&format!("Delete #{id}?"))
            .await;
        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.product_ops()
            .remove(id)
            .await
            .map_err(|e| self.fail("Delete", e))?;

        info!(id, "Product deleted");
        self.notify(&Notice::success("Deleted"));
        self.reload().await;
        Ok(DeleteOutcome::Deleted)
    }

    /// Product with its stock record; a product without stock is not an error.
    pub async fn detail(&self, id: ProductId) -> Result<ProductDetail, AdminError> {
        let product = self
            .product_ops()
            .get(id)
            .await
            .map_err(|e| self.fail("Detail load", e))?;
        let stock = self
            .stock_ops()
            .find(id)
            .await
            .map_err(|e| self.fail("Stock load", e))?;

        Ok(ProductDetail { product, stock })
    }

    // =========================================================================
    // Stock commands
    // =========================================================================

    /// Set the stock of a product to an absolute quantity.
    pub async fn set_stock(&self, id: ProductId, quantity: u64) -> Result<Stock, AdminError> {
        let stock = self
            .stock_ops()
            .set(id, quantity)
            .await
            .map_err(|e| self.fail("Stock update", e))?;

        self.notify(&Notice::success(format!(
            "Stock for #{id} set to {}",
            stock.quantity
        )));
        self.reload().await;
        Ok(stock)
    }

    /// Change the stock of a product by a signed delta.
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<Stock, AdminError> {
        let stock = self
            .stock_ops()
            .adjust(id, delta)
            .await
            .map_err(|e| self.fail("Stock update", e))?;

        self.notify(&Notice::success(format!(
            "Stock for #{id} is now {}",
            stock.quantity
        )));
        self.reload().await;
        Ok(stock)
    }

    /// Create the stock record of a product.
    pub async fn create_stock(&self, id: ProductId, quantity: u64) -> Result<Stock, AdminError> {
        let stock = self
            .stock_ops()
            .create(id, quantity)
            .await
            .map_err(|e| self.fail("Stock creation", e))?;

        self.notify(&Notice::success(format!(
            "Stock for #{id} created with {}",
            stock.quantity
        )));
        self.reload().await;
        Ok(stock)
    }
}
