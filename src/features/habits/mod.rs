//! Habit records and their completion history.

pub mod completions;
pub mod registry;

pub use completions::{CompletionLog, MarkOutcome};
pub use registry::{Registry, UpdateOutcome};
