//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Event Model
//! - One `Event` per classified record, plus exactly one `Event::Done` sentinel per run
//! - The sentinel is always the last message a consumer observes for a given run

mod blueprint;
mod classifier;
mod error;
mod event;
mod record;
mod source;

pub use blueprint::*;
pub use classifier::Classifier;
pub use error::*;
pub use event::Event;
pub use record::{Label, Record};
pub use source::RecordSource;
