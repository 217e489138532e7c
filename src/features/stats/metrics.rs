//! Metric calculations over a habit's completion dates.
//!
//! All calculations take `today` as an argument so results are deterministic
//! under test; callers pass the current local date.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::round2;

/// Current and longest run of consecutive completion days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    /// Consecutive days ending today with completions. A gap on today
    /// itself yields 0, even if yesterday closed a long run.
    pub current: usize,
    /// Longest run of consecutive days ever recorded.
    pub longest: usize,
}

impl StreakInfo {
    /// Calculate streaks from an ordered set of completion dates.
    #[must_use]
    pub fn calculate(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> Self {
        if dates.is_empty() {
            return Self {
                current: 0,
                longest: 0,
            };
        }

        // Longest: scan consecutive pairs ascending; a one-day step extends
        // the run, anything else resets it.
        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<NaiveDate> = None;

        for &date in dates {
            run = match prev {
                Some(p) if (date - p).num_days() == 1 => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(date);
        }

        // Current: walk backward from today while each day is present.
        let mut current = 0;
        let mut day = today;
        while dates.contains(&day) {
            current += 1;
            day -= Duration::days(1);
        }

        Self { current, longest }
    }
}

/// Fraction of days since creation on which the habit was completed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuccessRate {
    /// Percentage, rounded to two decimals. 0 when the creation date lies
    /// in the future.
    pub percent: f64,
}

impl SuccessRate {
    /// Calculate the rate from a creation date and completion count.
    ///
    /// The denominator counts days since creation inclusive of both
    /// endpoints: a habit created today has a one-day history.
    #[must_use]
    pub fn calculate(created: NaiveDate, completions: usize, today: NaiveDate) -> Self {
        let days = (today - created).num_days() + 1;
        if days <= 0 {
            return Self { percent: 0.0 };
        }

        #[allow(clippy::cast_precision_loss)]
        let percent = round2(completions as f64 / days as f64 * 100.0);
        Self { percent }
    }
}

/// Completions inside the trailing seven-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Completion dates falling within `[today - 6, today]`.
    pub completed: usize,
    /// Window length in days, always 7.
    pub window_days: usize,
}

impl WeeklySummary {
    /// Count completion dates within the inclusive 7-day window ending today.
    #[must_use]
    pub fn calculate(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> Self {
        let start = today - Duration::days(6);
        let completed = dates.iter().filter(|&&d| d >= start && d <= today).count();
        Self {
            completed,
            window_days: 7,
        }
    }
}
