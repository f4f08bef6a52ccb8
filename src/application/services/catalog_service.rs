//! Generic CRUD service over a single catalog collection.

use std::sync::Arc;

use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentId, ID_FIELD, InsertOutcome, UpdateOutcome,
    ensure_plain_fields,
};
use crate::domain::repositories::{DocumentFilter, DocumentRepository};
use crate::error::AppError;

/// CRUD operations bound to one collection.
///
/// One instance exists per entity (categories, services, gallery, FAQ and,
/// wrapped by [`super::ProductService`], products). Documents are passed
/// through verbatim; the only rule enforced here is that identity is always
/// generated by the store.
pub struct CatalogService {
    repository: Arc<dyn DocumentRepository>,
    collection: Collection,
}

impl CatalogService {
    /// Creates a service for `collection` backed by `repository`.
    pub fn new(repository: Arc<dyn DocumentRepository>, collection: Collection) -> Self {
        Self {
            repository,
            collection,
        }
    }

    /// Stores `document` as a new record.
    ///
    /// A client-supplied `_id` is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if a top-level field name starts with
    /// `$` or contains `.`.
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    pub async fn create(&self, mut document: Document) -> Result<InsertOutcome, AppError> {
        document.remove(ID_FIELD);
        ensure_plain_fields(&document)?;

        let outcome = self.repository.insert(self.collection, document).await?;
        tracing::info!(collection = %self.collection, id = %outcome.inserted_id, "document created");

        Ok(outcome)
    }

    /// Returns every document in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        self.repository
            .find(self.collection, DocumentFilter::All)
            .await
    }

    /// Returns documents matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    pub async fn list_matching(&self, filter: DocumentFilter) -> Result<Vec<Document>, AppError> {
        self.repository.find(self.collection, filter).await
    }

    /// Retrieves one document by identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no document has this id.
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    pub async fn get(&self, id: DocumentId) -> Result<Document, AppError> {
        self.repository
            .find_by_id(self.collection, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} not found", self.collection.entity())))
    }

    /// Overwrites the top-level fields in `patch`, leaving the rest untouched.
    ///
    /// `_id` is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `patch` contains no updatable field
    /// or a field name starting with `$` or containing `.`.
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    pub async fn update(
        &self,
        id: DocumentId,
        mut patch: Document,
    ) -> Result<UpdateOutcome, AppError> {
        patch.remove(ID_FIELD);
        ensure_plain_fields(&patch)?;

        if patch.is_empty() {
            return Err(AppError::bad_request(
                "request body contains no updatable fields",
            ));
        }

        let outcome = self
            .repository
            .update_fields(self.collection, id, patch)
            .await?;
        tracing::info!(
            collection = %self.collection,
            %id,
            matched = outcome.matched_count,
            modified = outcome.modified_count,
            "document updated"
        );

        Ok(outcome)
    }

    /// Deletes one document by identity.
    ///
    /// Deleting an unknown id succeeds with `deleted_count == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    pub async fn delete(&self, id: DocumentId) -> Result<DeleteOutcome, AppError> {
        let outcome = self.repository.delete(self.collection, id).await?;
        tracing::info!(
            collection = %self.collection,
            %id,
            deleted = outcome.deleted_count,
            "document deleted"
        );

        Ok(outcome)
    }
}
