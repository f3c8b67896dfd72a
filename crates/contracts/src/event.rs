//! Channel message type: data events plus the end-of-stream sentinel.

use serde::{Deserialize, Serialize};

use crate::Label;

/// A message on the pipeline's event channel.
///
/// The sentinel is encoded as a variant of the same type rather than an
/// out-of-band signal, so FIFO channel order alone guarantees that every
/// data event is consumed before end-of-stream is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A classified record
    Label(Label),
    /// End of stream; sent exactly once, always last
    Done,
}

impl Event {
    /// Whether this event is the end-of-stream sentinel.
    pub fn is_done(&self) -> bool {
        matches!(self, Event::Done)
    }
}
