//! Interactive numbered menu shell.
//!
//! A looping 1-10 menu driving the same registry, completion log, stats,
//! and export services as the subcommands. An invalid choice prints an
//! error and redisplays the menu.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::Settings;
use crate::core::model::HabitId;
use crate::core::today;
use crate::error::HabitualError;
use crate::features::export::Exporter;
use crate::features::habits::{CompletionLog, MarkOutcome, Registry, UpdateOutcome};
use crate::features::stats::StatsService;
use crate::output::format_habits_pretty;
use crate::storage::Store;

/// Run the interactive menu until the user exits.
///
/// # Errors
///
/// Returns an error if an operation fails to save the dataset or write the
/// export file. Unknown ids and invalid input are printed, not raised.
pub fn menu(store: &Store, settings: &Settings) -> Result<(), HabitualError> {
    loop {
        print_menu();

        // A closed stdin ends the session like choosing Exit.
        let Some(choice) = read_line("Choose") else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => add_habit(store)?,
            "2" => list_habits(store),
            "3" => mark_done(store)?,
            "4" => show_streak(store),
            "5" => delete_habit(store)?,
            "6" => rename_habit(store)?,
            "7" => show_rate(store),
            "8" => show_week(store),
            "9" => export_csv(store, settings)?,
            "10" => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("{}", "Invalid choice".red()),
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "Habit Tracker".bold());
    println!("{}", "─".repeat(30).dimmed());
    println!(" 1. Add habit");
    println!(" 2. List habits");
    println!(" 3. Mark habit done");
    println!(" 4. Show streak");
    println!(" 5. Delete habit");
    println!(" 6. Rename habit");
    println!(" 7. Show success rate");
    println!(" 8. Weekly summary");
    println!(" 9. Export CSV");
    println!("10. Exit");
}

fn add_habit(store: &Store) -> Result<(), HabitualError> {
    let Some(name) = read_line("Habit name") else {
        return Ok(());
    };
    if name.is_empty() {
        println!("{}", "Name required.".yellow());
        return Ok(());
    }
    let id = Registry::with_store(store.clone()).add(&name)?;
    println!("Habit added with id {}", id.to_string().green().bold());
    Ok(())
}

fn list_habits(store: &Store) {
    println!("{}", format_habits_pretty(&store.load()));
}

fn mark_done(store: &Store) -> Result<(), HabitualError> {
    let Some(id) = read_id("Habit id") else {
        return Ok(());
    };
    match CompletionLog::with_store(store.clone()).mark_today(id)? {
        MarkOutcome::Marked => println!("{}", "Marked done for today!".green()),
        MarkOutcome::AlreadyMarked => println!("{}", "Already marked done today.".yellow()),
        MarkOutcome::NotFound => println!("{}", format!("Habit {id} not found.").red()),
    }
    Ok(())
}

fn show_streak(store: &Store) {
    let Some(id) = read_id("Habit id") else {
        return;
    };
    let info = StatsService::with_store(store.clone()).streaks(id, today());
    println!(
        "Current streak: {} days, Longest streak: {} days",
        info.current, info.longest
    );
}

fn delete_habit(store: &Store) -> Result<(), HabitualError> {
    let Some(id) = read_id("Habit id to delete") else {
        return Ok(());
    };
    match Registry::with_store(store.clone()).delete(id)? {
        UpdateOutcome::Updated => println!("Habit deleted."),
        UpdateOutcome::NotFound => println!("{}", format!("Habit {id} not found.").red()),
    }
    Ok(())
}

fn rename_habit(store: &Store) -> Result<(), HabitualError> {
    let Some(id) = read_id("Habit id") else {
        return Ok(());
    };
    let Some(name) = read_line("New name") else {
        return Ok(());
    };
    if name.is_empty() {
        println!("{}", "Name required.".yellow());
        return Ok(());
    }
    match Registry::with_store(store.clone()).rename(id, &name)? {
        UpdateOutcome::Updated => println!("Habit name updated."),
        UpdateOutcome::NotFound => println!("{}", format!("Habit {id} not found.").red()),
    }
    Ok(())
}

fn show_rate(store: &Store) {
    let Some(id) = read_id("Habit id") else {
        return;
    };
    let rate = StatsService::with_store(store.clone()).success_rate(id, today());
    println!("Success rate: {}%", rate.percent);
}

fn show_week(store: &Store) {
    let Some(id) = read_id("Habit id") else {
        return;
    };
    let summary = StatsService::with_store(store.clone()).weekly_summary(id, today());
    println!(
        "Weekly summary: {}/{} days completed",
        summary.completed, summary.window_days
    );
}

fn export_csv(store: &Store, settings: &Settings) -> Result<(), HabitualError> {
    let path = &settings.export.default_path;
    Exporter::with_store(store.clone()).export(path)?;
    println!("Exported habits to {}", path.display().to_string().cyan());
    Ok(())
}

/// Read a trimmed line of input; `None` when stdin is closed.
fn read_line(prompt: &str) -> Option<String> {
    print!("{} {}: ", ">".green(), prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input).ok()?;
    if read == 0 {
        return None;
    }

    Some(input.trim().to_string())
}

/// Read a habit id, printing an error on unparsable input.
fn read_id(prompt: &str) -> Option<HabitId> {
    let input = read_line(prompt)?;
    match parse_id(&input) {
        Some(id) => Some(id),
        None => {
            println!("{}", "Invalid id, expected a number.".yellow());
            None
        }
    }
}

/// Parse a habit id from user input.
fn parse_id(input: &str) -> Option<HabitId> {
    input.trim().parse().ok()
}
