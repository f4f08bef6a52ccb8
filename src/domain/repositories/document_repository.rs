//! Repository trait for schema-less document collections.

use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentId, InsertOutcome, UpdateOutcome,
};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Selection criteria for [`DocumentRepository::find`].
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentFilter {
    /// Every document in the collection.
    All,
    /// Documents whose top-level `field` equals `value` exactly.
    Equals { field: String, value: Value },
}

impl DocumentFilter {
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Evaluates the filter against an in-memory document.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            DocumentFilter::All => true,
            DocumentFilter::Equals { field, value } => document.get(field) == Some(value),
        }
    }
}

/// Repository interface over the document store.
///
/// One long-lived implementation is constructed at startup and shared by
/// every service; implementations must be safe for concurrent use.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoDocumentRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Inserts `document` as a new record and returns the generated identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the document cannot be encoded.
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    async fn insert(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertOutcome, AppError>;

    /// Returns all documents matching `filter`, in natural storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    async fn find(
        &self,
        collection: Collection,
        filter: DocumentFilter,
    ) -> Result<Vec<Document>, AppError>;

    /// Looks up a single document by identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<Document>, AppError>;

    /// Overwrites the given top-level `fields` of one document, leaving all
    /// other fields untouched.
    ///
    /// An unknown id is not an error and reports `matched_count == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    async fn update_fields(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Document,
    ) -> Result<UpdateOutcome, AppError>;

    /// Deletes one document by identity.
    ///
    /// An unknown id is not an error and reports `deleted_count == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    async fn delete(&self, collection: Collection, id: DocumentId)
    -> Result<DeleteOutcome, AppError>;

    /// Returns the store's estimate of the number of documents.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    async fn estimated_count(&self, collection: Collection) -> Result<u64, AppError>;

    /// Checks connectivity to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
