//! JSON output formatting for habitual.

use serde::Serialize;
use serde_json::json;

use crate::core::model::{Dataset, HabitId};
use crate::error::HabitualError;
use crate::features::stats::{StreakInfo, SuccessRate, WeeklySummary};

/// Format the habit list as JSON.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_habits_json(data: &Dataset) -> Result<String, HabitualError> {
    let items: Vec<_> = data
        .habits
        .iter()
        .map(|h| {
            json!({
                "id": h.id,
                "name": h.name,
                "created": h.created,
                "completions": data.dates(h.id).map_or(0, std::collections::BTreeSet::len),
            })
        })
        .collect();

    let output = json!({
        "count": data.habits.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format streak information as JSON.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_streak_json(id: HabitId, info: &StreakInfo) -> Result<String, HabitualError> {
    let output = json!({
        "habit_id": id,
        "current": info.current,
        "longest": info.longest
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a success rate as JSON.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_rate_json(id: HabitId, rate: &SuccessRate) -> Result<String, HabitualError> {
    let output = json!({
        "habit_id": id,
        "success_rate": rate.percent
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the trailing-week summary as JSON.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn format_week_json(id: HabitId, summary: &WeeklySummary) -> Result<String, HabitualError> {
    let output = json!({
        "habit_id": id,
        "completed": summary.completed,
        "window_days": summary.window_days
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `HabitualError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, HabitualError> {
    Ok(serde_json::to_string_pretty(value)?)
}
