//! Product-specific document rules.

use super::Document;

/// Fields a product update may overwrite.
pub const PRODUCT_FIELDS: [&str; 6] = [
    "name",
    "price",
    "category",
    "isFeatured",
    "description",
    "image",
];

/// Field marking a product as featured.
pub const FEATURED_FIELD: &str = "isFeatured";

/// Exact value of [`FEATURED_FIELD`] for featured products.
///
/// Matching is case-sensitive and never coerces booleans.
pub const FEATURED_VALUE: &str = "Featured";

/// Builds the set of product fields to overwrite from an update body.
///
/// Only whitelisted fields present in `body` are kept; absent fields are
/// skipped rather than cleared.
pub fn product_patch(body: &Document) -> Document {
    PRODUCT_FIELDS
        .iter()
        .filter_map(|field| {
            body.get(*field)
                .map(|value| ((*field).to_string(), value.clone()))
        })
        .collect()
}
