//! Core domain entities of the catalog.
//!
//! Catalog entities are schema-less JSON documents; this module only models
//! what every handler relies on: which collection a document belongs to, how
//! it is identified, and what write operations acknowledge.
//!
//! # Entity Types
//!
//! - [`Collection`] - Named set of documents (categories, products, ...)
//! - [`Document`] - An untyped JSON object
//! - [`DocumentId`] - Store-generated identity
//! - [`InsertOutcome`], [`UpdateOutcome`], [`DeleteOutcome`] - Write acknowledgments
//!
//! Product-specific rules (update whitelist, featured marker) live in
//! [`product`].

pub mod collection;
pub mod document;
pub mod outcome;
pub mod product;

pub use collection::Collection;
pub use document::{Document, DocumentId, ID_FIELD, ensure_plain_fields};
pub use outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
