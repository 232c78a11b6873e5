//! Shared test utilities for qfan integration harnesses.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file. Helpers are deterministic under `tokio::time::pause()`.

pub mod builders;

pub use builders::*;
