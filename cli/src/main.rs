//! Pairforge CLI - Command-line interface for the vocabulary trainer.

mod commands;

use clap::{Parser, Subcommand};
use commands::{InspectCommand, StatsCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "pairforge")]
#[command(about = "A BPE vocabulary trainer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a vocabulary from a text corpus
    Train(TrainCommand),
    /// Show the most frequent adjacent pairs of a corpus
    Stats(StatsCommand),
    /// Summarize a saved model
    Inspect(InspectCommand),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Stats(cmd) => commands::stats::run(cmd)?,
        Commands::Inspect(cmd) => commands::inspect::run(cmd)?,
    }

    Ok(())
}
