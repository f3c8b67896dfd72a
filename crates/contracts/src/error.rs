//! Layered error definitions
//!
//! Categorized by source: config / source / classify / channel

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Source Errors =====
    /// Record source read failure
    #[error("source read error at record {record_id}: {message}")]
    SourceRead { record_id: u64, message: String },

    // ===== Classification Errors =====
    /// Classifier failure on a record; fatal to the run, never retried
    #[error("classification error for record {record_id}: {message}")]
    Classification { record_id: u64, message: String },

    // ===== Channel Errors =====
    /// Event channel send failure (consumer gone)
    #[error("channel send error: {message}")]
    ChannelSend { message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create source read error
    pub fn source_read(record_id: u64, message: impl Into<String>) -> Self {
        Self::SourceRead {
            record_id,
            message: message.into(),
        }
    }

    /// Create classification error
    pub fn classification(record_id: u64, message: impl Into<String>) -> Self {
        Self::Classification {
            record_id,
            message: message.into(),
        }
    }

    /// Create channel send error
    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }
}
