//! Mock record source
//!
//! In-memory source for tests without file fixtures. Supports injecting a
//! mid-stream read failure to exercise the driver's error path.

use std::collections::VecDeque;

use contracts::{ContractError, Record, RecordSource};

/// Mock record source
pub struct MockRecordSource {
    name: String,
    records: VecDeque<Record>,
    /// Fail with `SourceRead` after this many successful reads
    fail_after: Option<usize>,
    served: usize,
}

impl MockRecordSource {
    /// Create a source over the given texts, ids assigned in order.
    ///
    /// `None` entries become records with no text field.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let records = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Record {
                id: i as u64,
                text: text.map(Into::into),
            })
            .collect();

        Self {
            name: "mock".to_string(),
            records,
            fail_after: None,
            served: 0,
        }
    }

    /// Create an empty source.
    pub fn empty() -> Self {
        Self::from_texts(std::iter::empty::<Option<String>>())
    }

    /// Fail with `SourceRead` after `n` records have been served.
    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }
}

impl RecordSource for MockRecordSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn next_record(&mut self) -> Result<Option<Record>, ContractError> {
        if let Some(limit) = self.fail_after {
            if self.served >= limit {
                return Err(ContractError::source_read(
                    self.served as u64,
                    "mock source failure",
                ));
            }
        }

        let record = self.records.pop_front();
        if record.is_some() {
            self.served += 1;
        }
        Ok(record)
    }
}
