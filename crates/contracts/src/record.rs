//! Record and label types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Sentiment classification outcome for a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Compound score >= positive threshold
    Positive,
    /// Score between the thresholds, or blank input
    Neutral,
    /// Compound score <= negative threshold
    Negative,
}

impl Label {
    /// All labels, in exposition order.
    pub const ALL: [Label; 3] = [Label::Positive, Label::Neutral, Label::Negative];

    /// Prometheus counter name for this label.
    pub fn metric_name(&self) -> &'static str {
        match self {
            Label::Positive => "sentiment_positive_total",
            Label::Neutral => "sentiment_neutral_total",
            Label::Negative => "sentiment_negative_total",
        }
    }

    /// Lowercase label name (used in logs and summaries).
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Neutral => "neutral",
            Label::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input record.
///
/// The text field may be absent or blank; the driver maps such records to
/// `Label::Neutral` without consulting the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Ordinal of the record within its source (0-based)
    #[serde(default)]
    pub id: u64,

    /// Free-form text to classify
    #[serde(default)]
    pub text: Option<String>,
}

impl Record {
    /// Create a record with the given ordinal and text.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: Some(text.into()),
        }
    }

    /// Create a record with no text field.
    pub fn empty(id: u64) -> Self {
        Self { id, text: None }
    }

    /// Trimmed text, or `None` when the field is absent or whitespace-only.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serde_lowercase() {
        let json = serde_json::to_string(&Label::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        let back: Label = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(back, Label::Negative);
    }

    #[test]
    fn test_trimmed_text_blank_variants() {
        assert_eq!(Record::empty(0).trimmed_text(), None);
        assert_eq!(Record::new(1, "").trimmed_text(), None);
        assert_eq!(Record::new(2, "   \t ").trimmed_text(), None);
        assert_eq!(Record::new(3, "  ok  ").trimmed_text(), Some("ok"));
    }

    #[test]
    fn test_record_deserialize_missing_text() {
        let record: Record = serde_json::from_str("{}").unwrap();
        assert_eq!(record.text, None);
        assert_eq!(record.id, 0);
    }
}
