//! Human-readable colored output formatting.

use colored::Colorize;

use crate::core::model::{Dataset, HabitId};
use crate::features::stats::{StreakInfo, SuccessRate, WeeklySummary};

/// Format the habit list as a pretty table.
pub fn format_habits_pretty(data: &Dataset) -> String {
    if data.habits.is_empty() {
        return "Habits (0)\n  No habits yet".to_string();
    }

    let mut output = format!("Habits ({})\n", data.habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in &data.habits {
        let done = data.dates(habit.id).map_or(0, std::collections::BTreeSet::len);
        let line = format!(
            "{:>3}  {}  {}  {}",
            habit.id.to_string().cyan(),
            habit.name.bold(),
            format!("created {}", habit.created).dimmed(),
            format!("✓ {done}").green()
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format streak information for a habit.
pub fn format_streak_pretty(id: HabitId, info: &StreakInfo) -> String {
    let current = if info.current > 0 {
        format!("{} days", info.current).green().to_string()
    } else {
        "0 days".dimmed().to_string()
    };

    format!(
        "Habit {}\n  Current streak: {}\n  Longest streak: {} days",
        id.to_string().cyan(),
        current,
        info.longest
    )
}

/// Format a success rate percentage.
pub fn format_rate_pretty(id: HabitId, rate: &SuccessRate) -> String {
    format!(
        "Habit {}\n  Success rate: {}",
        id.to_string().cyan(),
        format!("{}%", rate.percent).bold()
    )
}

/// Format the trailing-week summary.
pub fn format_week_pretty(id: HabitId, summary: &WeeklySummary) -> String {
    format!(
        "Habit {}\n  Weekly summary: {} days completed",
        id.to_string().cyan(),
        format!("{}/{}", summary.completed, summary.window_days).bold()
    )
}
