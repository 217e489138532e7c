//! CSV export of habits and their completion history.
//!
//! One header row, then one row per habit: id, name, and the habit's
//! completion dates joined with ", ". Fields containing a comma, quote, or
//! newline are double-quoted with embedded quotes doubled, so the joined
//! dates column stays a single CSV field.

use std::path::Path;

use crate::error::HabitualError;
use crate::storage::Store;

/// CSV header row.
const HEADER: &str = "Habit ID,Habit Name,Completion Dates";

/// Writes the stored habits to a delimited text file.
pub struct Exporter {
    store: Store,
}

impl Exporter {
    /// Create an exporter over the default store location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, HabitualError> {
        Ok(Self {
            store: Store::open()?,
        })
    }

    /// Create an exporter over an existing store.
    #[must_use]
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    /// Export all habits to `path`. Returns the number of data rows written.
    ///
    /// The file is created even when no habits exist (header only).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export(&self, path: &Path) -> Result<usize, HabitualError> {
        let data = self.store.load();

        let mut out = String::from(HEADER);
        out.push('\n');

        for habit in &data.habits {
            let dates = data.dates(habit.id).map_or_else(String::new, |dates| {
                dates
                    .iter()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            });

            out.push_str(&habit.id.to_string());
            out.push(',');
            out.push_str(&quote_field(&habit.name));
            out.push(',');
            out.push_str(&quote_field(&dates));
            out.push('\n');
        }

        std::fs::write(path, out).map_err(HabitualError::Io)?;
        Ok(data.habits.len())
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
