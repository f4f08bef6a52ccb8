//! MongoDB repository implementation.
//!
//! Concrete implementation of [`crate::domain::repositories::DocumentRepository`]
//! on top of the official MongoDB driver.
//!
//! # Modules
//!
//! - [`MongoDocumentRepository`] - Collection CRUD, counts and health ping
//! - [`bson_json`] - BSON <-> JSON document conversion

pub mod bson_json;
pub mod mongo_document_repository;

pub use mongo_document_repository::MongoDocumentRepository;
