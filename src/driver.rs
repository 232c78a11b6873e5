//! Execution driver — runs the same retrieval workload in three invocation
//! patterns and reports wall-clock time for each.
//!
//! The three patterns:
//!
//! 1. **single** — one call, establishing the per-request baseline.
//! 2. **sequential** — N calls back-to-back on one retriever. Expected to
//!    take ≈ N × latency, since each call blocks for its full simulated cost.
//! 3. **parallel** — N independent retrievers dispatched through
//!    [`fan_out`](crate::fanout::fan_out). Expected to take ≈ 1 × latency,
//!    because the sleeps overlap.
//!
//! Elapsed times are measured with [`tokio::time::Instant`] so harnesses can
//! run the driver under a paused clock and assert exact multiples instead of
//! fuzzy wall-clock windows.

use serde::Serialize;

use crate::config::DemoConfig;
use crate::corpus::sample_corpus;
use crate::document::Document;
use crate::fanout::{fan_out, FanoutError};
use crate::retriever::ToyRetriever;

/// Invocation pattern a [`ModeReport`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Single,
    Sequential,
    Parallel,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Single => write!(f, "single"),
            Mode::Sequential => write!(f, "sequential"),
            Mode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Timing and hit counts for one invocation pattern.
#[derive(Debug, Clone, Serialize)]
pub struct ModeReport {
    pub mode: Mode,
    /// Number of retrieval calls issued.
    pub requests: usize,
    /// Wall-clock time for the whole pattern, in milliseconds.
    pub elapsed_ms: u64,
    /// Total documents returned across all calls.
    pub hits: usize,
}

/// The full comparison: one report per invocation pattern.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub single: ModeReport,
    pub sequential: ModeReport,
    pub parallel: ModeReport,
}

/// Run one retrieval call and time it.
pub async fn run_single(cfg: &DemoConfig) -> (Vec<Document>, ModeReport) {
    tracing::info!("running single mode - 1 request");
    let start = tokio::time::Instant::now();

    let retriever = ToyRetriever::new(sample_corpus(), cfg.k, cfg.latency);
    let results = retriever.retrieve(&cfg.query).await;

    let report = ModeReport {
        mode: Mode::Single,
        requests: 1,
        elapsed_ms: start.elapsed().as_millis() as u64,
        hits: results.len(),
    };
    tracing::info!(elapsed_ms = report.elapsed_ms, "single mode done");
    (results, report)
}

/// Run `cfg.requests` calls one after another on the same retriever.
pub async fn run_sequential(cfg: &DemoConfig) -> (Vec<Vec<Document>>, ModeReport) {
    tracing::info!(requests = cfg.requests, "running sequential mode");
    let start = tokio::time::Instant::now();

    let retriever = ToyRetriever::new(sample_corpus(), cfg.k, cfg.latency);
    let mut batches = Vec::with_capacity(cfg.requests);
    for _ in 0..cfg.requests {
        batches.push(retriever.retrieve(&cfg.query).await);
    }

    let report = ModeReport {
        mode: Mode::Sequential,
        requests: cfg.requests,
        elapsed_ms: start.elapsed().as_millis() as u64,
        hits: batches.iter().map(Vec::len).sum(),
    };
    tracing::info!(elapsed_ms = report.elapsed_ms, "sequential mode done");
    (batches, report)
}

/// Run `cfg.requests` calls concurrently, each on its own retriever instance
/// holding an independent copy of the corpus.
pub async fn run_parallel(
    cfg: &DemoConfig,
) -> Result<(Vec<Vec<Document>>, ModeReport), FanoutError> {
    tracing::info!(requests = cfg.requests, "running parallel mode");
    let start = tokio::time::Instant::now();

    let ops: Vec<_> = (0..cfg.requests)
        .map(|_| {
            let retriever = ToyRetriever::new(sample_corpus(), cfg.k, cfg.latency);
            let query = cfg.query.clone();
            async move { retriever.retrieve(&query).await }
        })
        .collect();
    let batches = fan_out(ops).await?;

    let report = ModeReport {
        mode: Mode::Parallel,
        requests: cfg.requests,
        elapsed_ms: start.elapsed().as_millis() as u64,
        hits: batches.iter().map(Vec::len).sum(),
    };
    tracing::info!(elapsed_ms = report.elapsed_ms, "parallel mode done");
    Ok((batches, report))
}

/// Run all three patterns in order and collect the comparison.
pub async fn run(cfg: &DemoConfig) -> Result<DemoReport, FanoutError> {
    let (_, single) = run_single(cfg).await;
    let (_, sequential) = run_sequential(cfg).await;
    let (_, parallel) = run_parallel(cfg).await?;
    Ok(DemoReport {
        single,
        sequential,
        parallel,
    })
}
