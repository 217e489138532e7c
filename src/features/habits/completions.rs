//! Completion log: per-habit set of completion dates.
//!
//! Marking a habit done is idempotent per day; a second mark on the same
//! date leaves exactly one entry. Unknown ids abort before anything is
//! written.

use chrono::NaiveDate;

use crate::core::model::HabitId;
use crate::core::today;
use crate::error::HabitualError;
use crate::storage::Store;

/// Result of recording a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The date was recorded.
    Marked,
    /// The date was already present; the log is unchanged.
    AlreadyMarked,
    /// No completion entry exists for that id; nothing was written.
    NotFound,
}

/// Per-habit completion log backed by a [`Store`].
pub struct CompletionLog {
    store: Store,
}

impl CompletionLog {
    /// Create a completion log over the default store location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, HabitualError> {
        Ok(Self {
            store: Store::open()?,
        })
    }

    /// Create a completion log over an existing store.
    #[must_use]
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    /// Record today's date for the habit, if not already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be saved.
    pub fn mark_today(&self, id: HabitId) -> Result<MarkOutcome, HabitualError> {
        self.mark_on(id, today())
    }

    /// Record a specific date for the habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be saved.
    pub fn mark_on(&self, id: HabitId, date: NaiveDate) -> Result<MarkOutcome, HabitualError> {
        let mut data = self.store.load();
        let Some(dates) = data.completions.get_mut(&id) else {
            return Ok(MarkOutcome::NotFound);
        };

        let inserted = dates.insert(date);
        self.store.save(&data)?;

        Ok(if inserted {
            MarkOutcome::Marked
        } else {
            MarkOutcome::AlreadyMarked
        })
    }

    /// Sorted completion dates for a habit; empty when the id is unknown.
    #[must_use]
    pub fn dates(&self, id: HabitId) -> Vec<NaiveDate> {
        self.store
            .load()
            .dates(id)
            .map(|dates| dates.iter().copied().collect())
            .unwrap_or_default()
    }
}
