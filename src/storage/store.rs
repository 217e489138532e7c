//! Whole-file JSON persistence for the habit dataset.
//!
//! The dataset lives in a single pretty-printed JSON document. Loading is
//! forgiving: a missing or unparsable file yields the default empty dataset
//! rather than an error. Saving rewrites the file in full; there is no
//! atomic-rename step, so a crash mid-write can corrupt the file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::Paths;
use crate::core::model::Dataset;
use crate::error::HabitualError;

/// File-backed store for the habit [`Dataset`].
#[derive(Debug, Clone)]
pub struct Store {
    /// Path to the JSON data file.
    path: PathBuf,
}

impl Store {
    /// Create a store at the default data file location (`~/.habitual/habits.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, HabitualError> {
        let paths = Paths::default();
        paths.ensure_dirs()?;
        Ok(Self {
            path: paths.data_file,
        })
    }

    /// Create a store backed by a specific file (used by `--data-dir` and tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the dataset from disk.
    ///
    /// A missing, unreadable, or corrupt file yields `Dataset::default()` —
    /// never an error.
    #[must_use]
    pub fn load(&self) -> Dataset {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Dataset::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Overwrite the backing file with the full serialized dataset.
    ///
    /// The document is pretty-printed with four-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, dataset: &Dataset) -> Result<(), HabitualError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(HabitualError::Io)?;
            }
        }

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        dataset
            .serialize(&mut ser)
            .map_err(|e| HabitualError::Storage(format!("Failed to serialize dataset: {e}")))?;

        std::fs::write(&self.path, buf).map_err(HabitualError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Habit;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn temp_store(dir: &TempDir) -> Store {
        Store::with_path(dir.path().join("habits.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let data = store.load();
        assert!(data.habits.is_empty());
        assert!(data.completions.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        std::fs::write(store.path(), "{this is not json").unwrap();

        let data = store.load();
        assert!(data.habits.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let mut data = Dataset::default();
        data.habits.push(Habit::new(1, "Exercise", date(2024, 1, 1)));
        data.completions
            .entry(1)
            .or_default()
            .insert(date(2024, 1, 3));

        store.save(&data).unwrap();
        let loaded = store.load();

        assert_eq!(loaded.habits, data.habits);
        assert_eq!(loaded.completions, data.completions);
    }

    #[test]
    fn test_save_pretty_prints_with_indent_4() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let mut data = Dataset::default();
        data.habits.push(Habit::new(1, "Exercise", date(2024, 1, 1)));
        data.completions.insert(1, Default::default());

        store.save(&data).unwrap();
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\n    \"habits\""));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = Store::with_path(dir.path().join("nested").join("habits.json"));

        store.save(&Dataset::default()).unwrap();
        assert!(store.path().exists());
    }
}
