//! In-memory stand-in for the backend.
//!
//! Used when no backend URL is configured. Holds an ordered product list
//! seeded with sample data, a monotonically increasing id sequence and a map
//! of stock records. State is mutated under a single lock between calls.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{NewProduct, Page, PageRequest, Product, ProductId, ProductPatch, Stock};
use crate::ports::{PortError, PortResult, ProductCatalogPort, StockPort};

#[derive(Debug, Default)]
struct MockState {
    /// Newest first: `create` prepends.
    products: Vec<Product>,
    /// Last id handed out; the next product gets `sequence + 1`.
    sequence: ProductId,
    stocks: HashMap<ProductId, Stock>,
}

/// In-memory implementation of [`ProductCatalogPort`] and [`StockPort`].
#[derive(Debug, Default)]
pub struct MockStore {
    state: Mutex<MockState>,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl MockStore {
    /// Store seeded with the three sample products.
    pub fn seeded() -> Self {
        let created_at = now_iso();
        let seed = [
            (1, "T-Shirt", 19900, "Basic cotton tee"),
            (2, "Hoodie", 39900, "Fleece hoodie"),
            (3, "Jeans", 49900, "Denim"),
        ];

        Self::with_products(
            seed.into_iter()
                .map(|(id, name, price, description)| Product {
                    id,
                    name: name.to_string(),
                    price,
                    description: Some(description.to_string()),
                    created_at: created_at.clone(),
                })
                .collect(),
        )
    }

    /// Store holding exactly `products`; the id sequence starts at their max id.
    pub fn with_products(products: Vec<Product>) -> Self {
        let sequence = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(MockState {
                products,
                sequence,
                stocks: HashMap::new(),
            }),
        }
    }

    /// Number of products currently held.
    pub async fn len(&self) -> usize {
        self.state.lock().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductCatalogPort for MockStore {
    async fn list(&self, request: &PageRequest) -> PortResult<Page<Product>> {
        let mut sorted = self.state.lock().await.products.clone();
        // Stable sort: equal keys keep their stored order, so repeated calls agree.
        sorted.sort_by(|a, b| request.sort.compare(a, b));

        let page = Page::from_items(sorted, request);
        debug!(
            page = page.number,
            size = page.size,
            sort = %request.sort,
            total = page.total_elements,
            "Mock list"
        );
        Ok(page)
    }

    async fn get(&self, id: ProductId) -> PortResult<Product> {
        self.state
            .lock()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("product", id))
    }

    async fn create(&self, product: &NewProduct) -> PortResult<Product> {
        let mut state = self.state.lock().await;
        state.sequence += 1;

        let created = Product {
            id: state.sequence,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            created_at: now_iso(),
        };
        state.products.insert(0, created.clone());
        drop(state);

        debug!(id = created.id, name = %created.name, "Mock product created");
        Ok(created)
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> PortResult<Product> {
        let mut state = self.state.lock().await;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PortError::not_found("product", id))?;

        product.apply_patch(patch);
        Ok(product.clone())
    }

    async fn remove(&self, id: ProductId) -> PortResult<()> {
        let mut state = self.state.lock().await;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);

        if state.products.len() == before {
            return Err(PortError::not_found("product", id));
        }
        debug!(id, "Mock product deleted");
        Ok(())
    }
}

#[async_trait]
impl StockPort for MockStore {
    async fn create(&self, product_id: ProductId, quantity: u64) -> PortResult<Stock> {
        let mut state = self.state.lock().await;
        if !state.products.iter().any(|p| p.id == product_id) {
            return Err(PortError::not_found("product", product_id));
        }

        let stock = Stock {
            product_id,
            quantity,
            version: Some(0),
        };
        state.stocks.insert(product_id, stock.clone());
        Ok(stock)
    }

    async fn get(&self, product_id: ProductId) -> PortResult<Stock> {
        self.state
            .lock()
            .await
            .stocks
            .get(&product_id)
            .cloned()
            .ok_or_else(|| PortError::not_found("stock for product", product_id))
    }

    async fn set(&self, product_id: ProductId, quantity: u64) -> PortResult<Stock> {
        let mut state = self.state.lock().await;
        let stock = state
            .stocks
            .get_mut(&product_id)
            .ok_or_else(|| PortError::not_found("stock for product", product_id))?;

        stock.quantity = quantity;
        stock.version = Some(stock.version.unwrap_or(0) + 1);
        Ok(stock.clone())
    }

    async fn adjust(&self, product_id: ProductId, delta: i64) -> PortResult<Stock> {
        let mut state = self.state.lock().await;
        let stock = state
            .stocks
            .get_mut(&product_id)
            .ok_or_else(|| PortError::not_found("stock for product", product_id))?;

        let next = i128::from(stock.quantity) + i128::from(delta);
        let quantity = u64::try_from(next).map_err(|_| PortError::BadResponse {
            status: None,
            code: Some("BUSINESS_ERROR".to_string()),
            message: format!(
                "Insufficient stock: requested {}, available {}",
                delta.unsigned_abs(),
                stock.quantity
            ),
        })?;

        stock.quantity = quantity;
        stock.version = Some(stock.version.unwrap_or(0) + 1);
        Ok(stock.clone())
    }
}
