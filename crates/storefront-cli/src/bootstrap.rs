//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - the HTTP clients (via storefront-http), or the in-memory demo store
//!   (via storefront-core) when no backend is configured
//! - the terminal presenter and stdin interaction
//! - the catalog controller (via storefront-admin)
//!
//! Command handlers receive the composed [`CliContext`] and delegate work to it.

use std::sync::Arc;

use storefront_admin::{AdminDeps, CatalogController, Interaction, PagingState, Presenter};
use storefront_core::{MockStore, ProductCatalogPort, SortSpec, StockPort};
use storefront_http::{ClientConfig, connect};
use tracing::{debug, info};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI, taken from global flags and env.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Fixed backend base URL.
    pub api_base: Option<String>,
    /// URL of the runtime config document.
    pub config_url: Option<String>,
    /// Override for the `/api/v1` path prefix.
    pub api_prefix: Option<String>,
    /// Products per page.
    pub page_size: Option<u32>,
    /// Zero-based page the listing starts on.
    pub page: u32,
    /// Initial sort order.
    pub sort: Option<SortSpec>,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_base: cli.api_base.clone(),
            config_url: cli.config_url.clone(),
            api_prefix: cli.api_prefix.clone(),
            page_size: cli.page_size,
            page: 0,
            sort: None,
        }
    }

    /// Start the listing at `page`, optionally with another size and sort.
    #[must_use]
    pub fn with_listing(mut self, page: u32, size: Option<u32>, sort: Option<SortSpec>) -> Self {
        self.page = page;
        self.page_size = size.or(self.page_size);
        self.sort = sort.or(self.sort);
        self
    }

    /// Initial paging state of the controller.
    pub fn paging(&self) -> PagingState {
        let base = self.page_size.map_or_else(PagingState::default, PagingState::new);
        PagingState {
            page: self.page,
            sort: self.sort.unwrap_or(base.sort),
            ..base
        }
    }

    /// Client configuration, or `None` when the demo store should be used.
    pub fn client_config(&self) -> Option<ClientConfig> {
        let config = match (&self.api_base, &self.config_url) {
            (Some(base), _) => ClientConfig::with_static_base(base.clone()),
            (None, Some(document)) => ClientConfig::from_document(document.clone()),
            (None, None) => return None,
        };

        Some(match &self.api_prefix {
            Some(prefix) => config.with_api_prefix(prefix.clone()),
            None => config,
        })
    }
}

/// Which backend the context talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendKind {
    /// In-memory catalog seeded with sample products.
    Demo,
    /// Remote REST backend at the resolved base URL.
    Remote { base_url: String },
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    controller: CatalogController,
    backend: BackendKind,
}

impl CliContext {
    /// Access the catalog controller.
    pub const fn controller(&self) -> &CatalogController {
        &self.controller
    }

    pub const fn backend(&self) -> &BackendKind {
        &self.backend
    }
}

async fn ports(
    config: &CliConfig,
) -> Result<(Arc<dyn ProductCatalogPort>, Arc<dyn StockPort>, BackendKind), CliError> {
    let Some(client_config) = config.client_config() else {
        info!("No backend configured, using the in-memory demo catalog");
        let store = Arc::new(MockStore::seeded());
        let catalog: Arc<dyn ProductCatalogPort> = store.clone();
        let stock: Arc<dyn StockPort> = store;
        return Ok((catalog, stock, BackendKind::Demo));
    };

    let api = connect(&client_config).await?;
    let backend = BackendKind::Remote {
        base_url: api.base_url().to_string(),
    };
    let (catalog, stock) = api.into_ports();
    Ok((catalog, stock, backend))
}

/// Bootstrap the CLI application.
///
/// Resolves the backend (fetching the runtime config document if one is
/// configured) and assembles the controller around the given front-end.
pub async fn bootstrap(
    config: &CliConfig,
    presenter: Arc<dyn Presenter>,
    interaction: Arc<dyn Interaction>,
) -> Result<CliContext, CliError> {
    let (catalog, stock, backend) = ports(config).await?;
    let paging = config.paging();
    debug!(?backend, ?paging, "Composing catalog controller");

    let deps = AdminDeps::new(catalog, presenter, interaction).with_stock(stock);
    let controller = CatalogController::with_paging(deps, paging);

    Ok(CliContext {
        controller,
        backend,
    })
}
