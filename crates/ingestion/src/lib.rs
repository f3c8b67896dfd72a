//! # Ingestion
//!
//! Record sources for the classification pipeline.
//!
//! Provides:
//! - `JsonlRecordSource`: lazy file-backed source, one JSON object per line
//! - `MockRecordSource`: in-memory source for tests, with injectable
//!   mid-stream failure
//!
//! Both implement `contracts::RecordSource`: a finite, non-restartable
//! stream that yields `Ok(None)` once at exhaustion.

mod jsonl;
mod mock;

pub use jsonl::JsonlRecordSource;
pub use mock::MockRecordSource;
