//! JSON Lines record source
//!
//! Reads one JSON object per line and projects the configured text field
//! into a `Record`. Lines are pulled lazily; the file is never buffered
//! whole.

use std::path::{Path, PathBuf};

use contracts::{ContractError, Record, RecordSource};
use serde_json::Value;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, trace};

/// File-backed record source (JSON Lines)
pub struct JsonlRecordSource {
    name: String,
    path: PathBuf,
    text_field: String,
    lines: Lines<BufReader<File>>,
    next_id: u64,
}

impl JsonlRecordSource {
    /// Open a JSONL file as a record source.
    ///
    /// # Arguments
    /// * `path` - Input file path
    /// * `text_field` - Name of the JSON field holding the text
    ///
    /// # Errors
    /// Returns `Io` when the file cannot be opened.
    pub async fn open(path: &Path, text_field: &str) -> Result<Self, ContractError> {
        let file = File::open(path).await?;
        debug!(path = %path.display(), text_field, "opened jsonl record source");

        Ok(Self {
            name: format!("jsonl:{}", path.display()),
            path: path.to_path_buf(),
            text_field: text_field.to_string(),
            lines: BufReader::new(file).lines(),
            next_id: 0,
        })
    }

    /// Input file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_line(&self, line: &str, id: u64) -> Result<Record, ContractError> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| ContractError::source_read(id, format!("invalid JSON line: {e}")))?;

        let text = match value.get(&self.text_field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(ContractError::source_read(
                    id,
                    format!(
                        "field '{}' must be a string, got {}",
                        self.text_field,
                        json_type_name(other)
                    ),
                ))
            }
        };

        Ok(Record { id, text })
    }
}

impl RecordSource for JsonlRecordSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn next_record(&mut self) -> Result<Option<Record>, ContractError> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };

            // Blank lines are separators, not records.
            if line.trim().is_empty() {
                continue;
            }

            let id = self.next_id;
            self.next_id += 1;

            let record = self.parse_line(&line, id)?;
            trace!(record_id = id, "record read");
            return Ok(Some(record));
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
