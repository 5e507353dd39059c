//! Controller state machine
//!
//! States, the events that drive them, and the transitions reported back
//! to the caller for logging.

pub mod events;
pub mod machine;

pub use events::{Event, MoveRecord, Transition};
pub use machine::{Outcome, State};
