//! Core data model for habitual.
//!
//! The entire on-disk state is one [`Dataset`] value: the habit records plus
//! a map from habit id to its set of completion dates. Every operation loads
//! a fresh `Dataset`, mutates it, and saves it back in full.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier for a habit. Assigned sequentially starting at 1.
pub type HabitId = u64;

/// A named recurring activity tracked by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, ≥ 1.
    pub id: HabitId,
    /// Display name.
    pub name: String,
    /// Date the habit was created.
    pub created: NaiveDate,
}

impl Habit {
    /// Create a new habit record.
    #[must_use]
    pub fn new(id: HabitId, name: impl Into<String>, created: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            created,
        }
    }
}

/// The full persisted state: habits plus their completion history.
///
/// Completions are keyed by habit id. `serde_json` encodes the integer keys
/// as JSON strings (`"1": [...]`), so the file shape stays compatible with
/// string-keyed documents while the code uses one id type throughout.
///
/// Invariant: every id in `habits` has an entry (possibly empty) in
/// `completions`; deleting a habit removes both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Habit records in insertion order.
    pub habits: Vec<Habit>,
    /// Per-habit ordered set of completion dates.
    pub completions: BTreeMap<HabitId, BTreeSet<NaiveDate>>,
}

impl Dataset {
    /// The id the next added habit will receive: max existing id + 1, or 1
    /// when no habits exist.
    #[must_use]
    pub fn next_id(&self) -> HabitId {
        self.habits.iter().map(|h| h.id).max().map_or(1, |id| id + 1)
    }

    /// Find a habit by id.
    #[must_use]
    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Find a habit by id, mutably.
    pub fn habit_mut(&mut self, id: HabitId) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    /// Completion dates for a habit, if it has an entry.
    #[must_use]
    pub fn dates(&self, id: HabitId) -> Option<&BTreeSet<NaiveDate>> {
        self.completions.get(&id)
    }
}
