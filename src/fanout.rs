//! Fan-out/join — run N independent futures as concurrent tasks and collect
//! every output, in input order, once all of them finish.
//!
//! This is the general-purpose replacement for a workflow engine's
//! parallel-map primitive: callers hand over a batch of independent
//! operations and get the full batch of results back, with the elapsed
//! wall-clock time bounded by the slowest operation rather than the sum.

use tokio::task::{JoinError, JoinSet};

/// A fanned-out task failed to complete.
///
/// The only failure mode is the task itself being lost — a panic inside the
/// future, or runtime-level cancellation. The operations this crate fans out
/// are infallible, so their own results carry no error variant.
#[derive(Debug, thiserror::Error)]
pub enum FanoutError {
    /// A spawned task panicked or was cancelled before completing.
    #[error("fanned-out task failed to join: {0}")]
    Join(#[from] JoinError),
}

/// Spawn every future in `ops` as an independent tokio task, wait for all of
/// them, and return their outputs in the order the futures were supplied.
///
/// All tasks are dispatched before the first join, so the batch overlaps
/// fully (up to the runtime's worker capacity). If any task panics the whole
/// batch is reported as failed; the remaining tasks are aborted when the
/// [`JoinSet`] is dropped.
pub async fn fan_out<F>(ops: Vec<F>) -> Result<Vec<F::Output>, FanoutError>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    let count = ops.len();
    let mut set = JoinSet::new();
    for (index, op) in ops.into_iter().enumerate() {
        set.spawn(async move { (index, op.await) });
    }

    let mut slots: Vec<Option<F::Output>> = std::iter::repeat_with(|| None).take(count).collect();
    while let Some(joined) = set.join_next().await {
        let (index, output) = joined?;
        slots[index] = Some(output);
    }

    Ok(slots
        .into_iter()
        .map(|slot| slot.expect("every index is spawned and joined exactly once"))
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
