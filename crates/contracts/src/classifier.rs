//! Classifier trait - sentiment scoring abstraction

use crate::{ContractError, Label};

/// Sentiment classifier trait
///
/// Pure with respect to the pipeline: deterministic for a given model, no
/// side effects visible to the driver. Implementations should hoist any
/// expensive model/lexicon initialization into construction so `classify`
/// stays cheap per call.
pub trait Classifier: Send + Sync {
    /// Classify a non-blank text into a label
    ///
    /// Blank-text short-circuiting is the driver's job; implementations may
    /// assume `text` has content.
    ///
    /// # Errors
    /// Returns `Classification`; fatal to the run, never retried.
    fn classify(&self, text: &str) -> Result<Label, ContractError>;
}
