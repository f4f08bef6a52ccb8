//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, CatalogService, ProductService, StatsService};
use crate::domain::entities::Collection;
use crate::domain::repositories::DocumentRepository;

/// Services shared by all handlers.
///
/// Every service is built on the same repository instance, so the process
/// holds exactly one database client. Cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CatalogService>,
    pub products: Arc<ProductService>,
    pub services: Arc<CatalogService>,
    pub gallery: Arc<CatalogService>,
    pub faq: Arc<CatalogService>,
    pub stats_service: Arc<StatsService>,
    pub auth_service: Arc<AuthService>,
    pub repository: Arc<dyn DocumentRepository>,
}

impl AppState {
    /// Wires all services onto `repository`.
    pub fn new(repository: Arc<dyn DocumentRepository>, auth_service: AuthService) -> Self {
        let catalog = |collection| Arc::new(CatalogService::new(repository.clone(), collection));

        Self {
            categories: catalog(Collection::Categories),
            products: Arc::new(ProductService::new(repository.clone())),
            services: catalog(Collection::Services),
            gallery: catalog(Collection::Gallery),
            faq: catalog(Collection::Faq),
            stats_service: Arc::new(StatsService::new(repository.clone())),
            auth_service: Arc::new(auth_service),
            repository,
        }
    }
}
