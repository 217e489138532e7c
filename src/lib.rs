//! habitual - A habit tracking CLI
//!
//! This crate provides a command-line interface for tracking daily habits:
//! marking them done, and deriving streaks, success rates, and weekly
//! summaries from the completion history.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::HabitualError;
pub use self::core::model::{Dataset, Habit, HabitId};
pub use storage::Store;
