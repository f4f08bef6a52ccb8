//! MongoDB implementation of the document repository.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Client, Database, options::ClientOptions};
use std::time::Duration;

use super::bson_json::{from_bson_document, to_bson_document, to_bson_value};
use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentId, InsertOutcome, UpdateOutcome,
};
use crate::domain::repositories::{DocumentFilter, DocumentRepository};
use crate::error::AppError;

/// Repository backed by a single long-lived MongoDB client.
///
/// The driver's client is internally pooled and safe to share across
/// concurrent requests; cloning the repository is never needed, wrap it in an
/// `Arc` instead.
pub struct MongoDocumentRepository {
    database: Database,
}

impl MongoDocumentRepository {
    /// Creates a repository over an already configured database handle.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Builds a client for `uri` and selects `database_name`.
    ///
    /// The driver connects lazily; call [`DocumentRepository::ping`] to verify
    /// the deployment is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed.
    pub async fn connect(
        uri: &str,
        database_name: &str,
        connect_timeout: Duration,
    ) -> Result<Self, AppError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(connect_timeout);

        let client = Client::with_options(options)?;

        Ok(Self::new(client.database(database_name)))
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<bson::Document> {
        self.database.collection(collection.name())
    }
}

/// Translates a [`DocumentFilter`] into a MongoDB query.
///
/// A plain `{ field: value }` query also matches arrays containing `value`;
/// `$expr` compares the whole field instead.
fn filter_query(filter: &DocumentFilter) -> Result<bson::Document, AppError> {
    Ok(match filter {
        DocumentFilter::All => doc! {},
        DocumentFilter::Equals { field, value } => {
            let path = format!("${field}");
            let value = to_bson_value(value)?;
            doc! { "$expr": { "$eq": [path, { "$literal": value }] } }
        }
    })
}

#[async_trait]
impl DocumentRepository for MongoDocumentRepository {
    async fn insert(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertOutcome, AppError> {
        let stored = to_bson_document(&document)?;

        let result = self.collection(collection).insert_one(stored).await?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::internal("store returned a non-ObjectId identity"))?;

        Ok(InsertOutcome::new(inserted_id.into()))
    }

    async fn find(
        &self,
        collection: Collection,
        filter: DocumentFilter,
    ) -> Result<Vec<Document>, AppError> {
        let query = filter_query(&filter)?;

        let documents: Vec<bson::Document> = self
            .collection(collection)
            .find(query)
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(from_bson_document).collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<Document>, AppError> {
        let found = self
            .collection(collection)
            .find_one(doc! { "_id": id.object_id() })
            .await?;

        Ok(found.map(from_bson_document))
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Document,
    ) -> Result<UpdateOutcome, AppError> {
        let set = to_bson_document(&fields)?;

        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id.object_id() }, doc! { "$set": set })
            .await?;

        Ok(UpdateOutcome::new(
            result.matched_count,
            result.modified_count,
        ))
    }

    async fn delete(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<DeleteOutcome, AppError> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id.object_id() })
            .await?;

        Ok(DeleteOutcome::new(result.deleted_count))
    }

    async fn estimated_count(&self, collection: Collection) -> Result<u64, AppError> {
        Ok(self
            .collection(collection)
            .estimated_document_count()
            .await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
