use std::sync::Arc;

use crate::catalog::Catalog;
use crate::core::Config;
use crate::imaging::ImageOrchestrator;
use crate::orders::{MemoryOrderStore, OrderService};
use crate::utils::AppResult;

/// Server state - shared references to every service
///
/// Cloning is cheap: everything sits behind `Arc`.
///
/// | Field | Type | Notes |
/// |-------|------|-------|
/// | config | Config | immutable |
/// | catalog | Arc<Catalog> | read-only menu |
/// | orders | Arc<OrderService> | order store + lifecycle |
/// | images | Arc<ImageOrchestrator> | tiered image generation |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub orders: Arc<OrderService>,
    pub images: Arc<ImageOrchestrator>,
}

impl ServerState {
    pub fn new(
        config: Config,
        catalog: Arc<Catalog>,
        orders: OrderService,
        mut images: ImageOrchestrator,
    ) -> Self {
        images.cap_budget(config.image_budget_limit());
        Self {
            config,
            catalog,
            orders: Arc::new(orders),
            images: Arc::new(images),
        }
    }

    /// Load the catalog and build services from configuration
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let catalog = Arc::new(Catalog::load(config.catalog_path.as_deref())?);
        let orders = OrderService::new(Arc::new(MemoryOrderStore::new()));
        let images = ImageOrchestrator::from_config(&config.imaging, catalog.clone())?;

        tracing::info!(
            ingredients = catalog.len(),
            sizes = catalog.sizes().len(),
            source = config.catalog_path.as_deref().unwrap_or("built-in"),
            "Catalog loaded"
        );

        Ok(Self::new(config.clone(), catalog, orders, images))
    }
}
