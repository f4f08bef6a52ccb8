//! Conversion between stored BSON documents and API JSON documents.
//!
//! Identities are exposed as plain hexadecimal strings rather than the
//! extended-JSON `{"$oid": ...}` form; every other value uses relaxed
//! extended JSON.

use bson::Bson;
use serde_json::Value;

use crate::domain::entities::Document;
use crate::error::AppError;

/// Encodes an API document for storage.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if a value cannot be represented in BSON
/// (e.g. an unsigned integer above `i64::MAX`).
pub fn to_bson_document(document: &Document) -> Result<bson::Document, AppError> {
    Ok(bson::to_document(document)?)
}

/// Encodes a single JSON value for use in a query.
pub fn to_bson_value(value: &Value) -> Result<Bson, AppError> {
    Ok(bson::to_bson(value)?)
}

/// Decodes a stored document into its API representation.
pub fn from_bson_document(document: bson::Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, from_bson(value)))
        .collect()
}

fn from_bson(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => Value::Object(from_bson_document(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(from_bson).collect()),
        other => other.into_relaxed_extjson(),
    }
}
