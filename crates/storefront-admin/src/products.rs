//! Product operations for the catalog controller.

use storefront_core::{
    NewProduct, Page, PageRequest, PortResult, Product, ProductId, ProductPatch,
};
use tracing::debug;

use crate::deps::AdminDeps;
use crate::loading::LoadingTracker;

/// Product operations handler.
pub struct ProductOps<'a> {
    deps: &'a AdminDeps,
    loading: &'a LoadingTracker,
}

impl<'a> ProductOps<'a> {
    pub const fn new(deps: &'a AdminDeps, loading: &'a LoadingTracker) -> Self {
        Self { deps, loading }
    }

    /// Fetch a page. When the requested page lies past the end (possible
    /// after deletions), the last existing page is fetched instead.
    pub async fn list(&self, request: &PageRequest) -> PortResult<Page<Product>> {
        let _loading = self.loading.begin();
        let page = self.deps.catalog.list(request).await?;

        if page.is_empty() && page.total_elements > 0 && page.number < request.page {
            debug!(
                requested = request.page,
                last = page.number,
                "Requested page past the end, fetching last page"
            );
            let last = PageRequest {
                page: page.number,
                ..*request
            };
            return self.deps.catalog.list(&last).await;
        }
        Ok(page)
    }

    /// Use the product from the loaded page when present, else fetch it.
    pub async fn resolve(
        &self,
        id: ProductId,
        loaded: Option<&Page<Product>>,
    ) -> PortResult<Product> {
        if let Some(product) = loaded.and_then(|page| page.content.iter().find(|p| p.id == id)) {
            return Ok(product.clone());
        }
        self.get(id).await
    }

    pub async fn get(&self, id: ProductId) -> PortResult<Product> {
        let _loading = self.loading.begin();
        self.deps.catalog.get(id).await
    }

    pub async fn create(&self, product: &NewProduct) -> PortResult<Product> {
        let _loading = self.loading.begin();
        let created = self.deps.catalog.create(product).await?;
        debug!(id = created.id, name = %created.name, "Product created");
        Ok(created)
    }

    pub async fn update(&self, id: ProductId, patch: &ProductPatch) -> PortResult<Product> {
        let _loading = self.loading.begin();
        self.deps.catalog.update(id, patch).await
    }

    pub async fn remove(&self, id: ProductId) -> PortResult<()> {
        let _loading = self.loading.begin();
        self.deps.catalog.remove(id).await
    }
}
