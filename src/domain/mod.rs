//! Domain layer containing catalog entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Collections, documents, identities and write acknowledgments
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; services in [`crate::application::services`] build on it.

pub mod entities;
pub mod repositories;
