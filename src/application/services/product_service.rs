//! Product catalog service.

use std::sync::Arc;

use crate::domain::entities::product::{FEATURED_FIELD, FEATURED_VALUE, product_patch};
use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentId, InsertOutcome, UpdateOutcome,
};
use crate::domain::repositories::{DocumentFilter, DocumentRepository};
use crate::error::AppError;

use super::CatalogService;

/// Service for the `products` collection.
///
/// Adds the featured listing and the whitelisted partial update on top of the
/// generic collection operations.
pub struct ProductService {
    catalog: CatalogService,
}

impl ProductService {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            catalog: CatalogService::new(repository, Collection::Products),
        }
    }

    pub async fn create(&self, document: Document) -> Result<InsertOutcome, AppError> {
        self.catalog.create(document).await
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        self.catalog.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id.
    pub async fn get(&self, id: DocumentId) -> Result<Document, AppError> {
        self.catalog.get(id).await
    }

    /// Lists products whose `isFeatured` field is exactly `"Featured"`.
    pub async fn list_featured(&self) -> Result<Vec<Document>, AppError> {
        self.catalog
            .list_matching(DocumentFilter::equals(FEATURED_FIELD, FEATURED_VALUE))
            .await
    }

    /// Updates the whitelisted product fields present in `body`.
    ///
    /// Fields outside the whitelist are ignored; whitelisted fields absent
    /// from `body` keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `body` has no whitelisted field.
    pub async fn update(&self, id: DocumentId, body: Document) -> Result<UpdateOutcome, AppError> {
        self.catalog.update(id, product_patch(&body)).await
    }

    pub async fn delete(&self, id: DocumentId) -> Result<DeleteOutcome, AppError> {
        self.catalog.delete(id).await
    }
}
