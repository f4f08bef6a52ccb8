//! Acknowledgments returned by write operations.
//!
//! Field names follow the document store's own wire vocabulary
//! (`insertedId`, `deletedCount`, ...) so storefront clients can keep
//! reading them unchanged.

use serde::Serialize;

use super::DocumentId;

/// Result of inserting one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: DocumentId,
}

/// Result of updating at most one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of deleting at most one document.
///
/// Deleting an unknown id is not an error; it reports `deleted_count == 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl InsertOutcome {
    pub fn new(inserted_id: DocumentId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

impl UpdateOutcome {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
        }
    }
}

impl DeleteOutcome {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_outcome_wire_format() {
        let id = DocumentId::parse("65f1a2b3c4d5e6f708192a3b").unwrap();
        let value = serde_json::to_value(InsertOutcome::new(id)).unwrap();

        assert_eq!(
            value,
            json!({ "acknowledged": true, "insertedId": "65f1a2b3c4d5e6f708192a3b" })
        );
    }

    #[test]
    fn test_delete_outcome_wire_format() {
        let value = serde_json::to_value(DeleteOutcome::new(0)).unwrap();
        assert_eq!(value, json!({ "acknowledged": true, "deletedCount": 0 }));
    }

    #[test]
    fn test_update_outcome_wire_format() {
        let value = serde_json::to_value(UpdateOutcome::new(1, 1)).unwrap();
        assert_eq!(
            value,
            json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 })
        );
    }
}
