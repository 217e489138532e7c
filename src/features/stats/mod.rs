//! Statistics over habit completion history.
//!
//! Provides streaks, success rate, and the trailing-week summary. The pure
//! calculations live in [`metrics`]; [`StatsService`] wires them to the
//! stored dataset.

pub mod metrics;

use chrono::NaiveDate;

use crate::core::model::HabitId;
use crate::error::HabitualError;
use crate::storage::Store;

pub use metrics::{StreakInfo, SuccessRate, WeeklySummary};

/// Answers per-habit statistics queries against the stored dataset.
///
/// Unknown ids yield zero values rather than errors, matching the rest of
/// the tracker's forgiving surface.
pub struct StatsService {
    store: Store,
}

impl StatsService {
    /// Create a stats service over the default store location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, HabitualError> {
        Ok(Self {
            store: Store::open()?,
        })
    }

    /// Create a stats service over an existing store.
    #[must_use]
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    /// Current and longest streak for a habit as of `today`.
    #[must_use]
    pub fn streaks(&self, id: HabitId, today: NaiveDate) -> StreakInfo {
        let data = self.store.load();
        data.dates(id).map_or(
            StreakInfo {
                current: 0,
                longest: 0,
            },
            |dates| StreakInfo::calculate(dates, today),
        )
    }

    /// Success rate for a habit as of `today`; 0 when the id is unknown.
    #[must_use]
    pub fn success_rate(&self, id: HabitId, today: NaiveDate) -> SuccessRate {
        let data = self.store.load();
        let Some(habit) = data.habit(id) else {
            return SuccessRate { percent: 0.0 };
        };
        let completions = data.dates(id).map_or(0, std::collections::BTreeSet::len);
        SuccessRate::calculate(habit.created, completions, today)
    }

    /// Completions in the trailing 7-day window ending `today`.
    #[must_use]
    pub fn weekly_summary(&self, id: HabitId, today: NaiveDate) -> WeeklySummary {
        let data = self.store.load();
        data.dates(id).map_or(
            WeeklySummary {
                completed: 0,
                window_days: 7,
            },
            |dates| WeeklySummary::calculate(dates, today),
        )
    }
}
