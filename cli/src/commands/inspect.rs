//! Inspect command implementation.

use anyhow::Result as AnyhowResult;
use clap::Parser;
use std::path::Path;
use subword_training::EncoderLoader;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Directory containing a saved model
    #[arg(short, long)]
    pub model: String,
}

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let encoder = EncoderLoader::load(Path::new(&cmd.model))?;

    println!(
        "{} merges, max symbol {}",
        encoder.merges.len(),
        encoder.max_symbol
    );
    for (rank, pair) in encoder.merges.iter().enumerate() {
        match encoder.replacements.get(pair) {
            Some(symbol) => println!("{:6}  {} -> {}", rank, pair, symbol),
            None => println!("{:6}  {}", rank, pair),
        }
    }

    Ok(())
}
