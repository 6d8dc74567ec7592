//! Recording collaborators and port doubles shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use storefront_core::{
    MockStore, NewProduct, Page, PageRequest, PortResult, Product, ProductCatalogPort, ProductEdit,
    ProductId, ProductPatch, StockPort,
};
use tokio::sync::Notify;

use crate::controller::CatalogController;
use crate::deps::AdminDeps;
use crate::view::{Interaction, ListView, Notice, NoticeLevel, Presenter};

/// Presenter that records everything it is asked to show.
#[derive(Default)]
pub struct RecordingPresenter {
    renders: Mutex<Vec<ListView>>,
    notices: Mutex<Vec<Notice>>,
    loading: Mutex<Vec<bool>>,
}

impl RecordingPresenter {
    pub fn renders(&self) -> Vec<ListView> {
        self.renders.lock().unwrap().clone()
    }

    pub fn last_render(&self) -> Option<ListView> {
        self.renders.lock().unwrap().last().cloned()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .map(|n| n.message)
            .collect()
    }

    pub fn loading_events(&self) -> Vec<bool> {
        self.loading.lock().unwrap().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&self, view: &ListView) {
        self.renders.lock().unwrap().push(view.clone());
    }

    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }

    fn set_loading(&self, loading: bool) {
        self.loading.lock().unwrap().push(loading);
    }
}

/// Interaction with fixed answers.
pub struct ScriptedInteraction {
    confirm: bool,
    edit: Option<ProductEdit>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn confirming(confirm: bool) -> Self {
        Self {
            confirm,
            edit: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn editing(edit: Option<ProductEdit>) -> Self {
        Self {
            confirm: true,
            edit,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Interaction for ScriptedInteraction {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.confirm
    }

    async fn edit_product(&self, current: &Product) -> Option<ProductEdit> {
        self.prompts
            .lock()
            .unwrap()
            .push(format!("edit #{}", current.id));
        self.edit.clone()
    }
}

/// Catalog whose first `list` call waits until the gate is opened.
pub struct GatedCatalog {
    inner: MockStore,
    gate: Arc<Notify>,
    calls: AtomicUsize,
}

impl GatedCatalog {
    pub fn new(inner: MockStore, gate: Arc<Notify>) -> Self {
        Self {
            inner,
            gate,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProductCatalogPort for GatedCatalog {
    async fn list(&self, request: &PageRequest) -> PortResult<Page<Product>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.gate.notified().await;
        }
        self.inner.list(request).await
    }

    async fn get(&self, id: ProductId) -> PortResult<Product> {
        ProductCatalogPort::get(&self.inner, id).await
    }

    async fn create(&self, product: &NewProduct) -> PortResult<Product> {
        ProductCatalogPort::create(&self.inner, product).await
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> PortResult<Product> {
        self.inner.update(id, patch).await
    }

    async fn remove(&self, id: ProductId) -> PortResult<()> {
        self.inner.remove(id).await
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalogPort for Catalog {
        async fn list(&self, request: &PageRequest) -> PortResult<Page<Product>>;
        async fn get(&self, id: ProductId) -> PortResult<Product>;
        async fn create(&self, product: &NewProduct) -> PortResult<Product>;
        async fn update(&self, id: ProductId, patch: &ProductPatch) -> PortResult<Product>;
        async fn remove(&self, id: ProductId) -> PortResult<()>;
    }
}

pub fn sample_product(id: ProductId, name: &str, price: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        description: None,
        created_at: "2024-05-01T10:00:00Z".to_string(),
    }
}

/// Controller wired to recording collaborators.
pub fn controller_with(
    catalog: Arc<dyn ProductCatalogPort>,
    stock: Option<Arc<dyn StockPort>>,
    interaction: ScriptedInteraction,
) -> (CatalogController, Arc<RecordingPresenter>, Arc<ScriptedInteraction>) {
    let presenter = Arc::new(RecordingPresenter::default());
    let interaction = Arc::new(interaction);

    let mut deps = AdminDeps::new(catalog, presenter.clone(), interaction.clone());
    if let Some(stock) = stock {
        deps = deps.with_stock(stock);
    }
    (CatalogController::new(deps), presenter, interaction)
}

/// Controller backed by a seeded mock store serving both ports.
pub fn mock_controller(
    interaction: ScriptedInteraction,
) -> (
    CatalogController,
    Arc<RecordingPresenter>,
    Arc<ScriptedInteraction>,
    Arc<MockStore>,
) {
    let store = Arc::new(MockStore::seeded());
    let (controller, presenter, interaction) =
        controller_with(store.clone(), Some(store.clone() as Arc<dyn StockPort>), interaction);
    (controller, presenter, interaction, store)
}
