//! Feature implementations for habitual.
//!
//! - Habit registry and completion log
//! - Statistics (streaks, success rate, weekly summary)
//! - CSV export

pub mod export;
pub mod habits;
pub mod stats;
