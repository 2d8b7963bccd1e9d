//! Subword CLI - Command-line interface for the BPE merge-table learner.

mod commands;

use clap::{Parser, Subcommand};
use commands::{InspectCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "subword")]
#[command(about = "Learn a BPE merge table from a text corpus", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a merge table from text data
    Train(TrainCommand),
    /// Print the merge list of a saved model
    Inspect(InspectCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Inspect(cmd) => commands::inspect::run(cmd)?,
    }

    Ok(())
}
