//! PipelineBlueprint - Config Loader output
//!
//! Describes a complete pipeline run: input source, classifier thresholds,
//! event channel sizing, metrics exposition, and shutdown policy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete pipeline configuration blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineBlueprint {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Input source settings
    pub input: InputConfig,

    /// Classifier settings
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Event channel settings
    #[serde(default)]
    pub channel: ChannelConfig,

    /// Metrics exposition settings
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Shutdown policy
    #[serde(default)]
    pub shutdown: ShutdownConfig,
}

/// Input source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the input file (JSON Lines, one record per line)
    pub path: PathBuf,

    /// Name of the record field holding the text to classify
    #[serde(default = "default_text_field")]
    pub text_field: String,
}

fn default_text_field() -> String {
    "text".to_string()
}

/// Classifier configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Compound score at or above which a text is positive
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,

    /// Compound score at or below which a text is negative
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
}

fn default_positive_threshold() -> f64 {
    0.05
}

fn default_negative_threshold() -> f64 {
    -0.05
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
        }
    }
}

/// Event channel configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Bounded channel capacity; a full channel blocks the producer
    #[serde(default = "default_channel_capacity")]
    pub capacity: usize,
}

fn default_channel_capacity() -> usize {
    100
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            capacity: default_channel_capacity(),
        }
    }
}

/// Metrics exposition configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Port for the Prometheus pull endpoint
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

fn default_metrics_port() -> u16 {
    9091
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

/// Shutdown policy configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShutdownConfig {
    /// Seconds to wait for the aggregator to drain after the sentinel is
    /// sent before forcibly terminating it (0 = wait forever)
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,
}

fn default_wait_timeout_secs() -> u64 {
    30
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            wait_timeout_secs: default_wait_timeout_secs(),
        }
    }
}
