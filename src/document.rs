//! Core document type shared by the retriever, the driver, and the harnesses.

use std::collections::HashMap;

/// An immutable unit of text held in memory, analogous to a document in a
/// retrieval system.
///
/// A document is its `body` plus a free-form map of string tags
/// (`"type" => "cat"`, `"trait" => "independence"`, …). Documents are built
/// once at startup and never mutated; every retriever holds its own copy of
/// the corpus, so they are cheap to clone and carry no interior mutability.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Document {
    /// The text body that queries are matched against.
    pub body: String,
    /// Free-form key/value tags attached at construction time.
    pub tags: HashMap<String, String>,
}

impl Document {
    /// Build a document from a body and an iterator of `(key, value)` tags.
    pub fn new<B, K, V, T>(body: B, tags: T) -> Self
    where
        B: Into<String>,
        K: Into<String>,
        V: Into<String>,
        T: IntoIterator<Item = (K, V)>,
    {
        Self {
            body: body.into(),
            tags: tags
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a tag value by key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// True if `body` contains `query` ignoring ASCII-irrelevant case
    /// differences (both sides are lowercased before the substring test).
    pub fn matches(&self, query: &str) -> bool {
        self.body.to_lowercase().contains(&query.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
