//! Pipeline statistics and reporting.

use std::time::Duration;

/// Statistics from a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Records the driver emitted as events
    pub records_streamed: u64,

    /// Positive label count (aggregator's final truth)
    pub positive: u64,

    /// Neutral label count
    pub neutral: u64,

    /// Negative label count
    pub negative: u64,

    /// Rows counted by the aggregator
    pub rows_processed: u64,

    /// Aggregator-measured processing time (start to sentinel)
    pub processing_seconds: f64,

    /// Total wall-clock duration of the run, driver side
    pub duration: Duration,

    /// Metrics endpoint port, if one was served
    pub metrics_port: Option<u16>,
}

impl PipelineStats {
    /// Calculate records per second throughput
    pub fn records_per_sec(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.rows_processed as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Share of a label among processed rows, as percentage
    fn share(&self, count: u64) -> f64 {
        if self.rows_processed > 0 {
            count as f64 / self.rows_processed as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════════╗");
        println!("║              Sentiment Summary               ║");
        println!("╚══════════════════════════════════════════════╝\n");

        println!("Overview");
        println!("   ├─ Rows processed: {}", self.rows_processed);
        println!(
            "   ├─ Processing time: {:.2}s",
            self.processing_seconds
        );
        println!("   ├─ Wall clock: {:.2}s", self.duration.as_secs_f64());
        println!("   └─ Throughput: {:.2} rows/s", self.records_per_sec());

        println!("\nLabels");
        println!(
            "   ├─ Positive: {} ({:.1}%)",
            self.positive,
            self.share(self.positive)
        );
        println!(
            "   ├─ Neutral:  {} ({:.1}%)",
            self.neutral,
            self.share(self.neutral)
        );
        println!(
            "   └─ Negative: {} ({:.1}%)",
            self.negative,
            self.share(self.negative)
        );

        if let Some(port) = self.metrics_port {
            println!(
                "\nAnalysis complete. Metrics available at http://localhost:{port}"
            );
        } else {
            println!("\nAnalysis complete.");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput() {
        let stats = PipelineStats {
            rows_processed: 100,
            duration: Duration::from_secs(4),
            ..Default::default()
        };
        assert!((stats.records_per_sec() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_throughput_zero_duration() {
        let stats = PipelineStats::default();
        assert_eq!(stats.records_per_sec(), 0.0);
    }

    #[test]
    fn test_share_empty_run() {
        let stats = PipelineStats::default();
        assert_eq!(stats.share(0), 0.0);
    }
}
