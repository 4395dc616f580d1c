mod export;
mod stats;
mod tui;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use notetask_core::extract_tasks;

#[derive(Parser)]
#[command(name = "notetask")]
#[command(about = "Turn free-form notes into a structured task list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Extract tasks from notes and print or export them
    Extract {
        /// Note text; reads stdin when no text and no --file is given
        notes: Vec<String>,
        /// Read the notes from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output format: table, doc or json
        #[arg(long, default_value = "table")]
        format: String,
        /// Write the output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show the analytics dashboard for tasks extracted from notes
    Stats {
        /// Note text; reads stdin when no text and no --file is given
        notes: Vec<String>,
        /// Read the notes from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Open the interactive checklist
    Tui,
}

fn read_notes(notes: Vec<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Could not read notes from {}", path.display()));
    }
    if !notes.is_empty() {
        return Ok(notes.join(" "));
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract { notes, file, format, output }) => {
            let text = read_notes(notes, file)?;
            if text.trim().is_empty() {
                println!("Please enter some notes to extract tasks.");
                return Ok(());
            }

            let today = Local::now().date_naive();
            let tasks = extract_tasks(&text, today);
            if tasks.is_empty() {
                println!("No tasks found in the notes.");
                return Ok(());
            }

            let rendered = match format.as_str() {
                "table" => export::render_table(&tasks),
                "doc" => export::render_document(&tasks),
                "json" => export::render_json(&tasks)?,
                other => {
                    println!("Unknown format '{}'. Expected table, doc or json.", other);
                    return Ok(());
                }
            };

            match output {
                Some(path) => {
                    fs::write(&path, &rendered)
                        .with_context(|| format!("Could not write {}", path.display()))?;
                    println!("Wrote {} task(s) to {}", tasks.len(), path.display());
                }
                None => println!("{}", rendered),
            }
        }
        Some(Commands::Stats { notes, file }) => {
            let text = read_notes(notes, file)?;
            if text.trim().is_empty() {
                println!("Please enter some notes to analyze.");
                return Ok(());
            }

            let today = Local::now().date_naive();
            let tasks = extract_tasks(&text, today);
            if tasks.is_empty() {
                println!("No tasks to analyze.");
                return Ok(());
            }
            stats::run(&tasks)?;
        }
        Some(Commands::Tui) | None => {
            tui::run()?;
        }
    }
    Ok(())
}
