//! Counter storage for the aggregator

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use contracts::Label;

/// The aggregator's owned counters plus the run-duration gauge.
///
/// Written only from the aggregator's consume loop; other contexts read
/// through `snapshot()`. The gauge is stored as f64 bits so the whole set
/// stays lock-free.
#[derive(Debug, Default)]
pub struct CounterSet {
    positive: AtomicU64,
    neutral: AtomicU64,
    negative: AtomicU64,
    rows_processed: AtomicU64,
    processing_seconds_bits: AtomicU64,
    done: AtomicBool,
}

impl CounterSet {
    /// Create a zeroed counter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified record
    pub fn record_label(&self, label: Label) {
        match label {
            Label::Positive => self.positive.fetch_add(1, Ordering::Relaxed),
            Label::Neutral => self.neutral.fetch_add(1, Ordering::Relaxed),
            Label::Negative => self.negative.fetch_add(1, Ordering::Relaxed),
        };
        self.rows_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Set the processing-time gauge and mark the set terminal.
    ///
    /// Called exactly once, at sentinel consumption.
    pub fn finish(&self, processing_seconds: f64) {
        self.processing_seconds_bits
            .store(processing_seconds.to_bits(), Ordering::Relaxed);
        self.done.store(true, Ordering::Release);
    }

    /// Count for one label
    pub fn count_for(&self, label: Label) -> u64 {
        match label {
            Label::Positive => self.positive.load(Ordering::Relaxed),
            Label::Neutral => self.neutral.load(Ordering::Relaxed),
            Label::Negative => self.negative.load(Ordering::Relaxed),
        }
    }

    /// Total rows counted so far
    pub fn rows_processed(&self) -> u64 {
        self.rows_processed.load(Ordering::Relaxed)
    }

    /// Whether the sentinel has been consumed
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            positive: self.count_for(Label::Positive),
            neutral: self.count_for(Label::Neutral),
            negative: self.count_for(Label::Negative),
            rows_processed: self.rows_processed(),
            processing_seconds: if self.is_done() {
                Some(f64::from_bits(
                    self.processing_seconds_bits.load(Ordering::Relaxed),
                ))
            } else {
                None
            },
        }
    }
}

/// Snapshot of aggregator counters (for reporting)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSnapshot {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
    pub rows_processed: u64,
    /// Set once the sentinel has been consumed
    pub processing_seconds: Option<f64>,
}

impl CounterSnapshot {
    /// Sum of all label counts
    pub fn label_total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }
}
