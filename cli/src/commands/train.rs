//! Train command implementation.

use anyhow::Result as AnyhowResult;
use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::Instant;
use subword_core::{Corpus, InMemoryCorpus};
use subword_training::{EncoderSaver, LearnConfig, Learner};

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training data file
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the learned model
    #[arg(short, long)]
    pub output: String,

    /// Maximum number of merges to learn
    #[arg(short, long, default_value_t = 30_000)]
    pub symbols: usize,

    /// Minimum pair frequency for a merge
    #[arg(short, long, default_value_t = 2)]
    pub min_frequency: i64,

    /// Build the initial statistics sequentially
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    println!("Training merge table...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    println!("  Symbols: {}", cmd.symbols);
    println!("  Min frequency: {}", cmd.min_frequency);
    println!();

    // Read training data
    let start = Instant::now();
    let data = fs::read_to_string(&cmd.input)?;
    let mut corpus = InMemoryCorpus::from_text(&data);
    println!(
        "Read {} bytes ({} distinct words) in {:.2}s",
        data.len(),
        corpus.len(),
        start.elapsed().as_secs_f64()
    );
    println!();

    // Learn
    let learner = Learner::new(LearnConfig {
        symbols: cmd.symbols,
        min_frequency: cmd.min_frequency,
        parallel: !cmd.sequential,
    });
    let start = Instant::now();
    let encoder = learner.learn(&mut corpus);
    println!(
        "Learned {} merges in {:.2}s (max symbol {})",
        encoder.merges.len(),
        start.elapsed().as_secs_f64(),
        encoder.max_symbol
    );
    println!();

    // Save model
    let output_path = Path::new(&cmd.output);
    let start = Instant::now();
    EncoderSaver::new(&encoder).save(output_path)?;
    println!(
        "Model saved to {} in {:.2}s",
        cmd.output,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
