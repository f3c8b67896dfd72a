//! # Aggregator
//!
//! Metrics aggregation side of the classification pipeline.
//!
//! The aggregator runs in its own tokio task, owns all counters, and is
//! the only component that mutates them. It consumes the event channel
//! until the `Done` sentinel arrives, then finalizes the processing-time
//! gauge and goes terminal. The Prometheus exposition endpoint it installs
//! keeps serving after the consume loop exits, so counters stay
//! queryable once processing completes.
//!
//! ## Shutdown handshake
//!
//! Producers send `Event::Done` exactly once, after all data events. FIFO
//! channel order guarantees every data event is counted before the
//! sentinel is observed, which is when `rows_processed == sum(labels)`
//! becomes the run's final truth.

mod counters;
mod error;
mod handle;

pub use counters::{CounterSet, CounterSnapshot};
pub use error::AggregatorError;
pub use handle::{AggregatorConfig, AggregatorHandle};
