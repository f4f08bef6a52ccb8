//! Named collections of the catalog.

use std::fmt;

/// A named, schema-less set of documents.
///
/// Every catalog entity lives in exactly one collection. The variants map
/// one-to-one onto the collection names used in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Categories,
    Products,
    Services,
    Gallery,
    Faq,
}

impl Collection {
    /// All collections, in a stable order.
    pub const ALL: [Collection; 5] = [
        Collection::Categories,
        Collection::Products,
        Collection::Services,
        Collection::Gallery,
        Collection::Faq,
    ];

    /// Collection name in the document store.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Categories => "categories",
            Collection::Products => "products",
            Collection::Services => "services",
            Collection::Gallery => "gallery",
            Collection::Faq => "faq",
        }
    }

    /// Singular, human-readable entity name used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Collection::Categories => "category",
            Collection::Products => "product",
            Collection::Services => "service",
            Collection::Gallery => "gallery item",
            Collection::Faq => "faq item",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
