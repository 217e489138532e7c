//! Habit registry: create, list, rename, and delete habit records.
//!
//! Every method is a self-contained load → mutate → save cycle against the
//! store; nothing is cached between calls.

use chrono::NaiveDate;

use crate::core::model::{Habit, HabitId};
use crate::core::today;
use crate::error::HabitualError;
use crate::storage::Store;

/// Result of an update targeting a habit by id.
///
/// Unknown ids are reported explicitly so callers can distinguish "nothing
/// happened" from "succeeded"; at the CLI boundary both still exit cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The habit was found and modified.
    Updated,
    /// No habit with that id exists; the dataset is unchanged.
    NotFound,
}

/// Registry of habit records backed by a [`Store`].
pub struct Registry {
    store: Store,
}

impl Registry {
    /// Create a registry over the default store location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, HabitualError> {
        Ok(Self {
            store: Store::open()?,
        })
    }

    /// Create a registry over an existing store.
    #[must_use]
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    /// Add a new habit, created today. Returns the assigned id.
    ///
    /// The id is max existing id + 1, or 1 when no habits exist. An empty
    /// completion entry is initialized for the new id.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be saved.
    pub fn add(&self, name: &str) -> Result<HabitId, HabitualError> {
        self.add_on(name, today())
    }

    /// Add a new habit with an explicit creation date.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be saved.
    pub fn add_on(&self, name: &str, created: NaiveDate) -> Result<HabitId, HabitualError> {
        let mut data = self.store.load();
        let id = data.next_id();
        data.habits.push(Habit::new(id, name, created));
        data.completions.insert(id, Default::default());
        self.store.save(&data)?;
        Ok(id)
    }

    /// All habits in stored order.
    #[must_use]
    pub fn list(&self) -> Vec<Habit> {
        self.store.load().habits
    }

    /// Rename the habit with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be saved.
    pub fn rename(&self, id: HabitId, new_name: &str) -> Result<UpdateOutcome, HabitualError> {
        let mut data = self.store.load();
        match data.habit_mut(id) {
            Some(habit) => {
                habit.name = new_name.to_string();
                self.store.save(&data)?;
                Ok(UpdateOutcome::Updated)
            }
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    /// Delete the habit with the given id and its completion entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be saved.
    pub fn delete(&self, id: HabitId) -> Result<UpdateOutcome, HabitualError> {
        let mut data = self.store.load();
        let before = data.habits.len();
        data.habits.retain(|h| h.id != id);
        let removed_entry = data.completions.remove(&id).is_some();

        if data.habits.len() == before && !removed_entry {
            return Ok(UpdateOutcome::NotFound);
        }

        self.store.save(&data)?;
        Ok(UpdateOutcome::Updated)
    }
}
