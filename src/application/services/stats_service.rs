//! Dashboard statistics service.

use std::sync::Arc;

use crate::domain::entities::Collection;
use crate::domain::repositories::DocumentRepository;
use crate::error::AppError;

/// Approximate document counts for the admin dashboard.
///
/// Counts come from independent estimates and are not transactionally
/// consistent with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub products: u64,
    pub categories: u64,
    pub services: u64,
    pub faq: u64,
}

/// Service aggregating per-collection counts.
pub struct StatsService {
    repository: Arc<dyn DocumentRepository>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    /// Issues the four count queries concurrently and aggregates them.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by any of the counts.
    pub async fn catalog_stats(&self) -> Result<CatalogStats, AppError> {
        let (products, categories, services, faq) = tokio::try_join!(
            self.repository.estimated_count(Collection::Products),
            self.repository.estimated_count(Collection::Categories),
            self.repository.estimated_count(Collection::Services),
            self.repository.estimated_count(Collection::Faq),
        )?;

        Ok(CatalogStats {
            products,
            categories,
            services,
            faq,
        })
    }
}
