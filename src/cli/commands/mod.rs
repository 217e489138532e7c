//! Command implementations for habitual.
//!
//! Each command is one function returning the text to print; `main` prints
//! whatever comes back. Every invocation builds its services over a fresh
//! [`Store`], so each command is a self-contained load-mutate-save cycle.

mod menu;

pub use menu::menu;

use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{Paths, Settings};
use crate::core::model::HabitId;
use crate::core::today;
use crate::error::HabitualError;
use crate::features::export::Exporter;
use crate::features::habits::{CompletionLog, MarkOutcome, Registry, UpdateOutcome};
use crate::features::stats::StatsService;
use crate::output::{format_habits, format_rate, format_streak, format_week, to_json};
use crate::storage::Store;

/// Resolve the store, honoring a `--data-dir` override.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub fn open_store(data_dir: Option<&Path>) -> Result<Store, HabitualError> {
    match data_dir {
        Some(dir) => {
            let paths = Paths::with_root(dir.to_path_buf());
            paths.ensure_dirs()?;
            Ok(Store::with_path(paths.data_file))
        }
        None => Store::open(),
    }
}

/// Load settings from the resolved config location.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_settings(data_dir: Option<&Path>) -> Result<Settings, HabitualError> {
    let paths = data_dir.map_or_else(Paths::default, |dir| Paths::with_root(dir.to_path_buf()));
    Settings::load(&paths)
}

/// Execute add command
///
/// # Errors
///
/// Returns an error if the dataset cannot be saved.
pub fn add(store: &Store, name: &str, format: OutputFormat) -> Result<String, HabitualError> {
    let id = Registry::with_store(store.clone()).add(name)?;
    match format {
        OutputFormat::Pretty => Ok(format!(
            "Habit added with id {}",
            id.to_string().green().bold()
        )),
        OutputFormat::Json => to_json(&json!({ "id": id, "name": name })),
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list(store: &Store, format: OutputFormat) -> Result<String, HabitualError> {
    format_habits(&store.load(), format)
}

/// Execute done command
///
/// # Errors
///
/// Returns an error if the dataset cannot be saved.
pub fn done(store: &Store, id: HabitId, format: OutputFormat) -> Result<String, HabitualError> {
    let outcome = CompletionLog::with_store(store.clone()).mark_today(id)?;
    match format {
        OutputFormat::Pretty => Ok(match outcome {
            MarkOutcome::Marked => "Marked done for today!".green().to_string(),
            MarkOutcome::AlreadyMarked => "Already marked done today.".yellow().to_string(),
            MarkOutcome::NotFound => format!("Habit {id} not found.").red().to_string(),
        }),
        OutputFormat::Json => to_json(&json!({
            "habit_id": id,
            "outcome": match outcome {
                MarkOutcome::Marked => "marked",
                MarkOutcome::AlreadyMarked => "already_marked",
                MarkOutcome::NotFound => "not_found",
            }
        })),
    }
}

/// Execute streak command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn streak(store: &Store, id: HabitId, format: OutputFormat) -> Result<String, HabitualError> {
    let info = StatsService::with_store(store.clone()).streaks(id, today());
    format_streak(id, &info, format)
}

/// Execute rate command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn rate(store: &Store, id: HabitId, format: OutputFormat) -> Result<String, HabitualError> {
    let rate = StatsService::with_store(store.clone()).success_rate(id, today());
    format_rate(id, &rate, format)
}

/// Execute week command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn week(store: &Store, id: HabitId, format: OutputFormat) -> Result<String, HabitualError> {
    let summary = StatsService::with_store(store.clone()).weekly_summary(id, today());
    format_week(id, &summary, format)
}

/// Execute rename command
///
/// # Errors
///
/// Returns an error if the dataset cannot be saved.
pub fn rename(
    store: &Store,
    id: HabitId,
    new_name: &str,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let outcome = Registry::with_store(store.clone()).rename(id, new_name)?;
    match format {
        OutputFormat::Pretty => Ok(match outcome {
            UpdateOutcome::Updated => "Habit name updated.".green().to_string(),
            UpdateOutcome::NotFound => format!("Habit {id} not found.").red().to_string(),
        }),
        OutputFormat::Json => to_json(&json!({
            "habit_id": id,
            "updated": outcome == UpdateOutcome::Updated
        })),
    }
}

/// Execute delete command
///
/// # Errors
///
/// Returns an error if the dataset cannot be saved.
pub fn delete(store: &Store, id: HabitId, format: OutputFormat) -> Result<String, HabitualError> {
    let outcome = Registry::with_store(store.clone()).delete(id)?;
    match format {
        OutputFormat::Pretty => Ok(match outcome {
            UpdateOutcome::Updated => "Habit deleted.".green().to_string(),
            UpdateOutcome::NotFound => format!("Habit {id} not found.").red().to_string(),
        }),
        OutputFormat::Json => to_json(&json!({
            "habit_id": id,
            "deleted": outcome == UpdateOutcome::Updated
        })),
    }
}

/// Execute export command
///
/// # Errors
///
/// Returns an error if the export file cannot be written.
pub fn export(
    store: &Store,
    path: Option<&Path>,
    settings: &Settings,
    format: OutputFormat,
) -> Result<String, HabitualError> {
    let target = path.unwrap_or(&settings.export.default_path);
    let rows = Exporter::with_store(store.clone()).export(target)?;
    match format {
        OutputFormat::Pretty => Ok(format!(
            "Exported {} habit{} to {}",
            rows,
            if rows == 1 { "" } else { "s" },
            target.display().to_string().cyan()
        )),
        OutputFormat::Json => to_json(&json!({
            "path": target.display().to_string(),
            "rows": rows
        })),
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, HabitualError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "habitual", &mut buf);
    String::from_utf8(buf).map_err(|e| HabitualError::Parse(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> Store {
        Store::with_path(dir.path().join("habits.json"))
    }

    #[test]
    fn test_add_then_list() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let output = add(&store, "Exercise", OutputFormat::Pretty).unwrap();
        assert!(output.contains("Habit added with id 1"));

        let output = list(&store, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Exercise"));
        colored::control::unset_override();
    }

    #[test]
    fn test_done_unknown_id_reports_not_found() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let output = done(&store, 5, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Habit 5 not found."));
        colored::control::unset_override();
    }

    #[test]
    fn test_json_outputs_parse() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        add(&store, "Exercise", OutputFormat::Json).unwrap();

        let output = list(&store, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["name"], "Exercise");

        let output = streak(&store, 1, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["habit_id"], 1);
    }

    #[test]
    fn test_export_uses_settings_default_path() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let mut settings = Settings::default();
        settings.export.default_path = dir.path().join("out.csv");

        let output = export(&store, None, &settings, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Exported 0 habits"));
        assert!(settings.export.default_path.exists());
        colored::control::unset_override();
    }

    #[test]
    fn test_completions_generate() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("habitual"));
    }
}
