//! AggregatorHandle - manages the aggregator task and its event channel

use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use contracts::{ContractError, Event, Label};

use crate::counters::{CounterSet, CounterSnapshot};
use crate::error::AggregatorError;

/// Aggregator configuration
#[derive(Debug, Clone, Copy)]
pub struct AggregatorConfig {
    /// Prometheus exposition port (None = no endpoint, counters only)
    pub metrics_port: Option<u16>,

    /// Event channel capacity; a full channel blocks the producer
    pub channel_capacity: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            metrics_port: Some(9091),
            channel_capacity: 100,
        }
    }
}

/// Handle to a running aggregator task
///
/// Created by [`AggregatorHandle::spawn`]. The handle is the producer-side
/// view: send events through it, then either await the terminal state with
/// [`wait_done`](Self::wait_done) or force termination with
/// [`abort`](Self::abort).
pub struct AggregatorHandle {
    tx: mpsc::Sender<Event>,
    counters: Arc<CounterSet>,
    worker_handle: JoinHandle<Result<CounterSnapshot, AggregatorError>>,
}

impl AggregatorHandle {
    /// Spawn the aggregator task and return its handle.
    ///
    /// Endpoint installation happens inside the task; a bind failure
    /// resolves the task with `EndpointBind` and closes the channel, which
    /// the producer observes as a failed send.
    pub fn spawn(config: AggregatorConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.channel_capacity);
        let counters = Arc::new(CounterSet::new());

        let worker_counters = Arc::clone(&counters);
        let worker_handle = tokio::spawn(async move {
            aggregator_worker(rx, worker_counters, config.metrics_port).await
        });

        Self {
            tx,
            counters,
            worker_handle,
        }
    }

    /// Send an event to the aggregator.
    ///
    /// Blocks when the channel is full; this is the pipeline's only
    /// back-pressure mechanism.
    ///
    /// # Errors
    /// Returns `ChannelSend` when the aggregator task is gone.
    pub async fn send(&self, event: Event) -> Result<(), ContractError> {
        self.tx
            .send(event)
            .await
            .map_err(|_| ContractError::channel_send("aggregator task is not consuming"))
    }

    /// Get a producer-side sender clone
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    /// Shared view of the counters
    pub fn counters(&self) -> Arc<CounterSet> {
        Arc::clone(&self.counters)
    }

    /// Whether the aggregator has consumed the sentinel
    pub fn is_done(&self) -> bool {
        self.counters.is_done()
    }

    /// Forcibly terminate the aggregator task.
    ///
    /// Error-recovery only; orderly shutdown goes through the sentinel.
    pub fn abort(&self) {
        self.worker_handle.abort();
    }

    /// Await the aggregator's terminal state and return the final counters.
    ///
    /// With a timeout, an unmet wait aborts the task and returns
    /// `WaitTimeout` so a stuck aggregator is never left running.
    #[instrument(name = "aggregator_wait_done", skip(self))]
    pub async fn wait_done(
        self,
        timeout: Option<Duration>,
    ) -> Result<CounterSnapshot, AggregatorError> {
        let Self {
            tx,
            counters: _,
            worker_handle: mut handle,
        } = self;
        drop(tx);

        match timeout {
            None => flatten(handle.await),
            Some(limit) => match tokio::time::timeout(limit, &mut handle).await {
                Ok(join_result) => flatten(join_result),
                Err(_) => {
                    error!(timeout = ?limit, "aggregator wait unmet, aborting task");
                    handle.abort();
                    Err(AggregatorError::WaitTimeout(limit))
                }
            },
        }
    }
}

fn flatten(
    join_result: Result<Result<CounterSnapshot, AggregatorError>, tokio::task::JoinError>,
) -> Result<CounterSnapshot, AggregatorError> {
    match join_result {
        Ok(result) => result,
        Err(e) => Err(AggregatorError::Worker {
            message: e.to_string(),
        }),
    }
}

/// Consume loop: counts data events until the sentinel arrives.
///
/// Counter mutation happens only here, so the `CounterSet` needs no
/// locking. After the loop exits the exporter's listener task keeps
/// serving the endpoint.
#[instrument(name = "aggregator_worker_loop", skip(rx, counters))]
async fn aggregator_worker(
    mut rx: mpsc::Receiver<Event>,
    counters: Arc<CounterSet>,
    metrics_port: Option<u16>,
) -> Result<CounterSnapshot, AggregatorError> {
    if let Some(port) = metrics_port {
        install_endpoint(port)?;
    }

    let start = Instant::now();
    debug!("aggregator started");

    while let Some(event) = rx.recv().await {
        match event {
            Event::Label(label) => {
                counters.record_label(label);
                counter!(label.metric_name()).increment(1);
                counter!("sentiment_rows_processed").increment(1);
            }
            Event::Done => {
                let elapsed = start.elapsed().as_secs_f64();
                counters.finish(elapsed);
                gauge!("sentiment_processing_seconds").set(elapsed);

                let snapshot = counters.snapshot();
                info!(
                    rows = snapshot.rows_processed,
                    positive = snapshot.positive,
                    neutral = snapshot.neutral,
                    negative = snapshot.negative,
                    processing_seconds = format!("{elapsed:.3}"),
                    "sentinel consumed, aggregation complete"
                );
                return Ok(snapshot);
            }
        }
    }

    error!(
        rows = counters.rows_processed(),
        "event channel closed without sentinel"
    );
    Err(AggregatorError::ChannelClosed)
}

/// Install the Prometheus recorder and HTTP listener, and pre-register
/// every series so a scrape sees them at zero before the first event.
fn install_endpoint(port: u16) -> Result<(), AggregatorError> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .map_err(|e| AggregatorError::endpoint_bind(port, e.to_string()))?;

    for label in Label::ALL {
        counter!(label.metric_name()).absolute(0);
    }
    counter!("sentiment_rows_processed").absolute(0);
    gauge!("sentiment_processing_seconds").set(0.0);

    info!(port, "Prometheus metrics endpoint initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AggregatorConfig {
        // No endpoint in unit tests: the recorder is process-global.
        AggregatorConfig {
            metrics_port: None,
            channel_capacity: 16,
        }
    }

    #[tokio::test]
    async fn test_counts_then_terminates_on_sentinel() {
        let handle = AggregatorHandle::spawn(test_config());

        for label in [Label::Positive, Label::Neutral, Label::Neutral, Label::Negative] {
            handle.send(Event::Label(label)).await.unwrap();
        }
        handle.send(Event::Done).await.unwrap();

        let snapshot = handle.wait_done(Some(Duration::from_secs(5))).await.unwrap();
        assert_eq!(snapshot.positive, 1);
        assert_eq!(snapshot.neutral, 2);
        assert_eq!(snapshot.negative, 1);
        assert_eq!(snapshot.rows_processed, 4);
        assert_eq!(snapshot.label_total(), snapshot.rows_processed);
    }

    #[tokio::test]
    async fn test_empty_stream_reaches_terminal_state() {
        let handle = AggregatorHandle::spawn(test_config());
        handle.send(Event::Done).await.unwrap();

        let snapshot = handle.wait_done(Some(Duration::from_secs(5))).await.unwrap();
        assert_eq!(snapshot.rows_processed, 0);
        assert_eq!(snapshot.label_total(), 0);
        assert!(snapshot.processing_seconds.is_some());
    }

    #[tokio::test]
    async fn test_gauge_set_once_at_sentinel() {
        let handle = AggregatorHandle::spawn(test_config());
        let counters = handle.counters();

        handle.send(Event::Label(Label::Positive)).await.unwrap();
        // Still streaming: gauge unset, not terminal.
        assert_eq!(counters.snapshot().processing_seconds, None);

        handle.send(Event::Done).await.unwrap();
        let snapshot = handle.wait_done(Some(Duration::from_secs(5))).await.unwrap();
        let seconds = snapshot.processing_seconds.unwrap();
        assert!(seconds >= 0.0);
    }

    #[tokio::test]
    async fn test_channel_closed_without_sentinel_is_error() {
        let handle = AggregatorHandle::spawn(test_config());
        handle.send(Event::Label(Label::Neutral)).await.unwrap();

        // wait_done drops the producer side; with no sentinel the worker
        // sees a closed channel.
        let err = handle.wait_done(Some(Duration::from_secs(5))).await.unwrap_err();
        assert!(matches!(err, AggregatorError::ChannelClosed));
    }

    #[tokio::test]
    async fn test_unmet_wait_aborts_task() {
        let handle = AggregatorHandle::spawn(test_config());
        // Keep the channel open so the worker stays blocked in recv().
        let _tx = handle.sender();

        let err = handle
            .wait_done(Some(Duration::from_millis(50)))
            .await
            .unwrap_err();
        assert!(matches!(err, AggregatorError::WaitTimeout(_)));
    }

    #[tokio::test]
    async fn test_abort_resolves_as_worker_error() {
        let handle = AggregatorHandle::spawn(test_config());
        handle.abort();

        let err = handle.wait_done(Some(Duration::from_secs(5))).await.unwrap_err();
        assert!(matches!(err, AggregatorError::Worker { .. }));
    }
}
