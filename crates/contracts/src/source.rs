//! RecordSource trait - record stream abstraction
//!
//! Defines a unified interface for record sources, decoupling the pipeline
//! driver from concrete inputs. File-backed and Mock sources implement the
//! same trait.

use crate::{ContractError, Record};

/// Record stream trait
///
/// A lazy, finite, non-restartable sequence of records. `next_record`
/// returns `Ok(None)` exactly once, at exhaustion; after that the source
/// must not be polled again.
///
/// # Example
///
/// ```ignore
/// let mut source: Box<dyn RecordSource> = open_source()?;
/// while let Some(record) = source.next_record().await? {
///     println!("record {}: {:?}", record.id, record.text);
/// }
/// ```
#[trait_variant::make(RecordSource: Send)]
pub trait LocalRecordSource {
    /// Source name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Pull the next record
    ///
    /// # Errors
    /// Returns `SourceRead` on transport or decode failure; the run treats
    /// this as fatal.
    async fn next_record(&mut self) -> Result<Option<Record>, ContractError>;
}
