//! Repository trait definitions for the domain layer.
//!
//! The catalog has a single storage seam: [`DocumentRepository`], a
//! collection-addressed document store. The production implementation lives
//! in `crate::infrastructure::persistence`; a mock is generated via `mockall`
//! for unit tests, and integration tests inject an in-memory fake.

pub mod document_repository;

pub use document_repository::{DocumentFilter, DocumentRepository};

#[cfg(test)]
pub use document_repository::MockDocumentRepository;
