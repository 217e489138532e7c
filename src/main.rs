use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use habitual::cli::args::{Cli, Commands};
use habitual::cli::commands;
use habitual::error::HabitualError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HabitualError> {
    let cli = Cli::parse();
    let format = cli.output;

    let settings = commands::load_settings(cli.data_dir.as_deref())?;
    settings.apply_color();
    let store = commands::open_store(cli.data_dir.as_deref())?;

    let output = match cli.command {
        Commands::Add { name } => commands::add(&store, &name, format)?,
        Commands::List => commands::list(&store, format)?,
        Commands::Done { id } => commands::done(&store, id, format)?,
        Commands::Streak { id } => commands::streak(&store, id, format)?,
        Commands::Rate { id } => commands::rate(&store, id, format)?,
        Commands::Week { id } => commands::week(&store, id, format)?,
        Commands::Rename { id, name } => commands::rename(&store, id, &name, format)?,
        Commands::Delete { id } => commands::delete(&store, id, format)?,
        Commands::Export { path } => commands::export(&store, path.as_deref(), &settings, format)?,
        Commands::Menu => {
            commands::menu(&store, &settings)?;
            String::new()
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
