//! qfan — Query Fan-out.
//!
//! A small demonstration that N independent blocking retrieval requests,
//! dispatched concurrently, finish in roughly the time of one request rather
//! than N of them. Each request's only cost is a fixed artificial sleep that
//! stands in for real I/O, so the comparison isolates scheduling from work.
//!
//! # Architecture
//!
//! ```text
//! corpus ──► ToyRetriever ──► driver ──► DemoReport
//!                  │
//!                  └── fan_out (parallel mode)
//! ```
//!
//! Everything runs on tokio. The retriever itself is a bounded
//! case-insensitive substring scan; the driver times it under single,
//! sequential, and fanned-out invocation patterns. Integration harnesses
//! import these modules directly, so all of them are public.

pub mod config;
pub mod corpus;
pub mod document;
pub mod driver;
pub mod fanout;
pub mod retriever;

pub use config::DemoConfig;
pub use document::Document;
pub use fanout::{fan_out, FanoutError};
pub use retriever::ToyRetriever;
