#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use symbol_eye_api::application::services::AuthService;
use symbol_eye_api::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentId, ID_FIELD, InsertOutcome, UpdateOutcome,
};
use symbol_eye_api::domain::repositories::{DocumentFilter, DocumentRepository};
use symbol_eye_api::error::AppError;
use symbol_eye_api::routes::router;
use symbol_eye_api::state::AppState;

pub const JWT_SECRET: &str = "test-jwt-secret";
pub const ADMIN_EMAIL: &str = "admin@symboleye.test";

/// In-memory document store standing in for MongoDB.
///
/// Keeps insertion order, counts every call, and can be switched to
/// "unreachable" to exercise 503 paths.
#[derive(Default)]
pub struct InMemoryRepository {
    collections: Mutex<HashMap<Collection, Vec<Document>>>,
    unavailable: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Inserts `value` directly, bypassing the API, and returns its id.
    pub fn seed(&self, collection: Collection, value: Value) -> String {
        let mut document = value.as_object().cloned().expect("seed must be an object");
        let id = DocumentId::new();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));

        self.collections
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(document);

        id.to_hex()
    }

    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    fn enter(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            Err(AppError::service_unavailable("database unavailable"))
        } else {
            Ok(())
        }
    }
}

fn has_id(document: &Document, id: DocumentId) -> bool {
    document.get(ID_FIELD) == Some(&Value::String(id.to_hex()))
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn insert(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<InsertOutcome, AppError> {
        self.enter()?;

        let id = DocumentId::new();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
        self.collections
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(document);

        Ok(InsertOutcome::new(id))
    }

    async fn find(
        &self,
        collection: Collection,
        filter: DocumentFilter,
    ) -> Result<Vec<Document>, AppError> {
        self.enter()?;

        Ok(self
            .documents(collection)
            .into_iter()
            .filter(|d| filter.matches(d))
            .collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<Document>, AppError> {
        self.enter()?;

        Ok(self
            .documents(collection)
            .into_iter()
            .find(|d| has_id(d, id)))
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Document,
    ) -> Result<UpdateOutcome, AppError> {
        self.enter()?;

        let mut collections = self.collections.lock().unwrap();
        let Some(document) = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| has_id(d, id)))
        else {
            return Ok(UpdateOutcome::new(0, 0));
        };

        let mut modified = false;
        for (key, value) in fields {
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome::new(1, u64::from(modified)))
    }

    async fn delete(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<DeleteOutcome, AppError> {
        self.enter()?;

        let mut collections = self.collections.lock().unwrap();
        let docs = collections.entry(collection).or_default();
        let before = docs.len();
        if let Some(pos) = docs.iter().position(|d| has_id(d, id)) {
            docs.remove(pos);
        }

        Ok(DeleteOutcome::new((before - docs.len()) as u64))
    }

    async fn estimated_count(&self, collection: Collection) -> Result<u64, AppError> {
        self.enter()?;
        Ok(self.documents(collection).len() as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.enter()
    }
}

pub fn test_auth_service() -> AuthService {
    AuthService::new(
        JWT_SECRET,
        ADMIN_EMAIL.to_string(),
        chrono::Duration::days(30),
    )
}

pub fn create_test_state(repository: Arc<InMemoryRepository>) -> AppState {
    AppState::new(repository, test_auth_service())
}

/// Full application router over `repository`.
pub fn make_server(repository: Arc<InMemoryRepository>) -> TestServer {
    let state = create_test_state(repository);
    TestServer::new(router(state, Duration::from_secs(5))).unwrap()
}

pub fn token_for(email: &str) -> String {
    let claims = json!({ "email": email }).as_object().cloned().unwrap();
    test_auth_service().issue_token(claims).unwrap()
}

pub fn admin_token() -> String {
    token_for(ADMIN_EMAIL)
}
