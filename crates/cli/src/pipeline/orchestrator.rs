//! Pipeline orchestrator - the driver side of the run.
//!
//! Sequences record retrieval, classification, and event emission, and
//! manages the aggregator's lifecycle: spawn, stream, sentinel, bounded
//! wait, forced termination on the error path. Whatever fails, the
//! aggregator is never left blocked on a sentinel that will not arrive.

use std::time::{Duration, Instant};

use aggregator::{AggregatorConfig, AggregatorHandle};
use anyhow::{Context, Result};
use classifier::LexiconClassifier;
use contracts::{Classifier, ContractError, Event, Label, PipelineBlueprint, RecordSource};
use ingestion::JsonlRecordSource;
use tracing::{debug, info, warn};

use super::PipelineStats;

/// How long the error path waits for the aggregator before aborting it
const ERROR_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// The pipeline blueprint
    pub blueprint: PipelineBlueprint,

    /// Metrics endpoint port (None = disabled)
    pub metrics_port: Option<u16>,

    /// Maximum number of records to process (None = unlimited)
    pub max_records: Option<u64>,
}

/// Main pipeline driver
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline to completion
    pub async fn run(self) -> Result<PipelineStats> {
        let start_time = Instant::now();
        let blueprint = &self.config.blueprint;

        // Classifier construction hoists lexicon indexing once for the run.
        let classifier = LexiconClassifier::new(blueprint.classifier);

        info!(
            input = %blueprint.input.path.display(),
            text_field = %blueprint.input.text_field,
            "Opening record source"
        );

        let mut source =
            JsonlRecordSource::open(&blueprint.input.path, &blueprint.input.text_field)
                .await
                .with_context(|| {
                    format!("Failed to open input {}", blueprint.input.path.display())
                })?;

        let aggregator = AggregatorHandle::spawn(AggregatorConfig {
            metrics_port: self.config.metrics_port,
            channel_capacity: blueprint.channel.capacity,
        });

        if let Some(port) = self.config.metrics_port {
            info!(port, "Aggregator spawned with metrics endpoint");
        } else {
            info!("Aggregator spawned (metrics endpoint disabled)");
        }

        let streamed = Self::stream_records(
            &mut source,
            &classifier,
            &aggregator,
            self.config.max_records,
        )
        .await;

        match streamed {
            Ok(records_streamed) => {
                // Orderly shutdown: exactly one sentinel, then a bounded
                // wait for the aggregator's terminal state.
                if let Err(send_err) = aggregator.send(Event::Done).await {
                    // The aggregator died before the sentinel (endpoint
                    // bind failure, panic); its own error is the real one.
                    let err = match aggregator.wait_done(Some(ERROR_DRAIN_TIMEOUT)).await {
                        Err(agg_err) => anyhow::Error::new(agg_err),
                        Ok(_) => anyhow::Error::new(send_err),
                    };
                    return Err(err.context("Aggregator failed before sentinel"));
                }
                debug!(records_streamed, "sentinel sent");

                let wait = wait_timeout(blueprint.shutdown.wait_timeout_secs);
                let snapshot = aggregator
                    .wait_done(wait)
                    .await
                    .context("Aggregator did not reach terminal state")?;

                Ok(PipelineStats {
                    records_streamed,
                    positive: snapshot.positive,
                    neutral: snapshot.neutral,
                    negative: snapshot.negative,
                    rows_processed: snapshot.rows_processed,
                    processing_seconds: snapshot.processing_seconds.unwrap_or(0.0),
                    duration: start_time.elapsed(),
                    metrics_port: self.config.metrics_port,
                })
            }
            Err(e) => {
                Self::cleanup_on_error(aggregator).await;
                Err(e).context("Pipeline streaming failed")
            }
        }
    }

    /// Stream records from the source into the aggregator.
    ///
    /// Blank or missing text short-circuits to `neutral` without touching
    /// the classifier.
    async fn stream_records<S: RecordSource>(
        source: &mut S,
        classifier: &dyn Classifier,
        aggregator: &AggregatorHandle,
        max_records: Option<u64>,
    ) -> Result<u64, ContractError> {
        let mut streamed: u64 = 0;

        while let Some(record) = source.next_record().await? {
            let label = match record.trimmed_text() {
                None => {
                    debug!(record_id = record.id, "blank text, short-circuited to neutral");
                    Label::Neutral
                }
                Some(text) => classifier.classify(text)?,
            };

            aggregator.send(Event::Label(label)).await?;
            streamed += 1;

            if streamed.is_multiple_of(1000) {
                debug!(records = streamed, "streaming progress");
            }

            if let Some(max) = max_records {
                if streamed >= max {
                    info!(records = streamed, "Reached max records limit");
                    break;
                }
            }
        }

        Ok(streamed)
    }

    /// Error-path cleanup: best-effort sentinel, then a bounded wait that
    /// aborts the aggregator if it cannot finish. Prevents an orphaned
    /// task blocked on `recv` forever.
    async fn cleanup_on_error(aggregator: AggregatorHandle) {
        if aggregator.sender().try_send(Event::Done).is_err() {
            warn!("could not deliver sentinel on error path, aggregator will be aborted");
        }

        match aggregator.wait_done(Some(ERROR_DRAIN_TIMEOUT)).await {
            Ok(snapshot) => {
                info!(
                    rows = snapshot.rows_processed,
                    "aggregator drained on error path"
                );
            }
            Err(e) => {
                warn!(error = %e, "aggregator did not shut down cleanly");
            }
        }
    }
}

fn wait_timeout(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}
