//! Aggregator error types

use std::time::Duration;

use thiserror::Error;

/// Aggregator-specific errors
#[derive(Debug, Error)]
pub enum AggregatorError {
    /// Exposition endpoint could not be installed (port in use, recorder
    /// conflict). Fatal to the aggregator task.
    #[error("failed to bind metrics endpoint on port {port}: {message}")]
    EndpointBind { port: u16, message: String },

    /// Event channel closed before the sentinel arrived; the producer died
    /// without completing the shutdown handshake.
    #[error("event channel closed before sentinel was received")]
    ChannelClosed,

    /// The aggregator task did not reach its terminal state in time and
    /// was forcibly terminated.
    #[error("aggregator did not finish within {0:?}, task aborted")]
    WaitTimeout(Duration),

    /// The aggregator task panicked or was aborted.
    #[error("aggregator task failed: {message}")]
    Worker { message: String },
}

impl AggregatorError {
    /// Create an endpoint bind error
    pub fn endpoint_bind(port: u16, message: impl Into<String>) -> Self {
        Self::EndpointBind {
            port,
            message: message.into(),
        }
    }
}
