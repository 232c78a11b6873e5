//! Test builders — ergonomic constructors for `Document`, retrievers, and
//! corpora.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::collections::HashMap;
use std::time::Duration;

use qfan::{Document, ToyRetriever};

// ---------------------------------------------------------------------------
// DocumentBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Document`] test fixtures.
///
/// # Example
///
/// ```rust
/// let doc = DocumentBuilder::new("Cats are independent pets.")
///     .tag("type", "cat")
///     .tag("trait", "independence")
///     .build();
/// ```
pub struct DocumentBuilder {
    body: String,
    tags: HashMap<String, String>,
}

impl DocumentBuilder {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            tags: HashMap::new(),
        }
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Document {
        Document::new(self.body, self.tags)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an untagged document.
pub fn doc(body: &str) -> Document {
    DocumentBuilder::new(body).build()
}

/// Build a retriever with zero latency, for harnesses that care about the
/// scan semantics rather than the timing profile.
pub fn instant_retriever(documents: Vec<Document>, k: usize) -> ToyRetriever {
    ToyRetriever::new(documents, k, Duration::ZERO)
}

/// Build a corpus of `n` documents all containing the marker word "match",
/// interleaved with `n` documents that do not.
pub fn saturated_corpus(n: usize) -> Vec<Document> {
    (0..n)
        .flat_map(|i| {
            [
                doc(&format!("record {i} is a match for the query")),
                doc(&format!("record {i} stays out of the results")),
            ]
        })
        .collect()
}
