//! Core abstractions for habitual.
//!
//! This module provides the data model and shared date utilities used
//! across features.

mod dates;
pub mod model;

pub use dates::{round2, today};
pub use model::{Dataset, Habit, HabitId};
