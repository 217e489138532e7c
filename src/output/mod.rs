//! Output formatting for habitual.
//!
//! Commands return strings; these helpers pick between the pretty (colored)
//! and JSON renderings based on the global output format.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::model::{Dataset, HabitId};
use crate::error::HabitualError;
use crate::features::stats::{StreakInfo, SuccessRate, WeeklySummary};

pub use json::*;
pub use pretty::*;

/// Format the habit list based on output format.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_habits(data: &Dataset, format: OutputFormat) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(data)),
        OutputFormat::Json => format_habits_json(data),
    }
}

/// Format streak information based on output format.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_streak(
    id: HabitId,
    info: &StreakInfo,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_streak_pretty(id, info)),
        OutputFormat::Json => format_streak_json(id, info),
    }
}

/// Format a success rate based on output format.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_rate(
    id: HabitId,
    rate: &SuccessRate,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_rate_pretty(id, rate)),
        OutputFormat::Json => format_rate_json(id, rate),
    }
}

/// Format the weekly summary based on output format.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_week(
    id: HabitId,
    summary: &WeeklySummary,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    match format {
        OutputFormat::Pretty => Ok(format_week_pretty(id, summary)),
        OutputFormat::Json => format_week_json(id, summary),
    }
}
