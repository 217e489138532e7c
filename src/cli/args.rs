use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::model::HabitId;

#[derive(Parser)]
#[command(name = "habitual")]
#[command(about = "A fast command-line habit tracker with streaks and statistics")]
#[command(long_about = "habitual - A habit tracking CLI

Track daily habits, mark them done, and watch your streaks grow.
All data lives in a single JSON file under ~/.habitual/.

QUICK START:
  habitual add \"Exercise\"   Start tracking a habit
  habitual done 1           Mark habit 1 done for today
  habitual streak 1         Show current and longest streak
  habitual menu             Interactive numbered menu

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  habitual <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Data directory override (default: ~/.habitual)
    #[arg(long, env = "HABITUAL_DIR", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start tracking a new habit
    ///
    /// Assigns the next sequential id and records today as the creation
    /// date. The id is what every other command takes.
    ///
    /// # Examples
    ///
    ///   habitual add "Exercise"
    ///   habitual a "Read 20 pages"
    #[command(alias = "a")]
    Add {
        /// Habit name
        name: String,
    },

    /// List all tracked habits
    ///
    /// Shows each habit's id, name, creation date, and total completion
    /// count, in the order they were added.
    ///
    /// # Examples
    ///
    ///   habitual list
    ///   habitual ls -o json      Output as JSON for scripting
    #[command(alias = "ls")]
    List,

    /// Mark a habit done for today
    ///
    /// Idempotent per day: marking the same habit twice on one date keeps
    /// a single entry. Unknown ids print a message and change nothing.
    ///
    /// # Examples
    ///
    ///   habitual done 1
    ///   habitual d 1
    #[command(alias = "d")]
    Done {
        /// Habit id
        id: HabitId,
    },

    /// Show current and longest streak for a habit
    ///
    /// The current streak counts consecutive days with completions ending
    /// today; a day without a completion resets it to 0.
    Streak {
        /// Habit id
        id: HabitId,
    },

    /// Show a habit's success rate
    ///
    /// Percentage of days since the habit was created (inclusive) on which
    /// it was completed, rounded to two decimals.
    Rate {
        /// Habit id
        id: HabitId,
    },

    /// Show completions in the last 7 days
    ///
    /// Counts completion dates inside the inclusive window ending today.
    Week {
        /// Habit id
        id: HabitId,
    },

    /// Rename a habit
    Rename {
        /// Habit id
        id: HabitId,
        /// New habit name
        name: String,
    },

    /// Delete a habit and its completion history
    ///
    /// # Examples
    ///
    ///   habitual delete 2
    ///   habitual rm 2
    #[command(alias = "rm")]
    Delete {
        /// Habit id
        id: HabitId,
    },

    /// Export habits and completion dates to a CSV file
    ///
    /// Writes a header row followed by one row per habit. The file is
    /// created even when no habits exist.
    ///
    /// # Examples
    ///
    ///   habitual export                 Write habits_export.csv
    ///   habitual export backup.csv      Write to a custom path
    Export {
        /// Output file path (default: habits_export.csv)
        path: Option<PathBuf>,
    },

    /// Interactive numbered menu
    ///
    /// A looping 1-10 menu driving the same operations as the
    /// subcommands, for working through several habits at once.
    #[command(alias = "m")]
    Menu,

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   habitual completions bash > /usr/local/etc/bash_completion.d/habitual
    ///   habitual completions zsh > ~/.zsh/completions/_habitual
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
