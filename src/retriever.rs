//! Toy retriever — a bounded case-insensitive substring scan behind a fixed
//! artificial delay.
//!
//! The delay stands in for real I/O (network round-trip, disk seek). Because
//! it is the only cost in the operation, the driver can demonstrate cleanly
//! that overlapping independent calls collapses total latency while running
//! them back-to-back multiplies it.

use std::time::Duration;

use crate::document::Document;

/// A retriever over a fixed in-memory corpus.
///
/// Each instance owns its own copy of the documents, so concurrent callers
/// share nothing and need no locking.
#[derive(Debug, Clone)]
pub struct ToyRetriever {
    documents: Vec<Document>,
    k: usize,
    latency: Duration,
}

impl ToyRetriever {
    /// Build a retriever over `documents` with result bound `k` and a fixed
    /// simulated latency paid on every call.
    pub fn new(documents: Vec<Document>, k: usize, latency: Duration) -> Self {
        Self {
            documents,
            k,
            latency,
        }
    }

    /// The configured result bound.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Retrieve documents whose body contains `query`, case-insensitively,
    /// in corpus order, after sleeping for the configured latency.
    ///
    /// The size check runs *before* each candidate is tested and uses a
    /// strict greater-than, so a query with enough matches returns up to
    /// `k + 1` documents, not `k`. That cutoff is kept as-is and covered by
    /// the retrieval harness; callers needing a hard cap should truncate.
    ///
    /// There is no failure mode: an absent match yields an empty `Vec`.
    pub async fn retrieve(&self, query: &str) -> Vec<Document> {
        let start = tokio::time::Instant::now();
        tracing::info!(query, "processing query");

        // Simulated I/O cost.
        tokio::time::sleep(self.latency).await;

        let mut matching = Vec::new();
        for document in &self.documents {
            if matching.len() > self.k {
                break;
            }
            if document.matches(query) {
                matching.push(document.clone());
            }
        }

        tracing::info!(
            hits = matching.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "replying with results"
        );
        matching
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
