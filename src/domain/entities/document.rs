//! Schema-less documents and their identity.

use bson::oid::ObjectId;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A single JSON record stored in a collection.
///
/// Handlers never impose a schema; whatever object the client posts is
/// stored as-is.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Field holding the store-generated identity of a document.
pub const ID_FIELD: &str = "_id";

/// Rejects top-level field names the store would read as operators or paths.
///
/// A `$` prefix is an update operator and a `.` addresses a nested field, so
/// neither can name a top-level field literally.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] naming the first offending field.
pub fn ensure_plain_fields(document: &Document) -> Result<(), AppError> {
    match document
        .keys()
        .find(|key| key.is_empty() || key.starts_with('$') || key.contains('.'))
    {
        Some(key) => Err(AppError::bad_request(format!(
            "invalid field name: '{key}'"
        ))),
        None => Ok(()),
    }
}

/// Store-generated document identity.
///
/// Wraps a 12-byte ObjectId. Rendered and parsed as a 24-character
/// hexadecimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Generates a fresh identity.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parses an identity from its hexadecimal form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `raw` is not a valid ObjectId.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse()
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for DocumentId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| AppError::bad_request(format!("invalid identifier: {s}")))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}
