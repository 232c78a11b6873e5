//! Demo configuration.
//!
//! [`DemoConfig::default`] carries the hardcoded values of the original demo
//! (query `"that"`, k = 3, 3 s latency, batches of 5); the CLI layers its
//! optional flag overrides on top.

use std::time::Duration;

/// Knobs for one driver run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Query string sent to every retrieval call.
    pub query: String,
    /// Result bound per call. May return up to `k + 1` hits, see
    /// [`ToyRetriever::retrieve`](crate::retriever::ToyRetriever::retrieve).
    pub k: usize,
    /// Simulated I/O latency paid by every retrieval call.
    pub latency: Duration,
    /// Number of calls in the sequential and parallel batches.
    pub requests: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            query: "that".to_string(),
            k: 3,
            latency: Duration::from_secs(3),
            requests: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
