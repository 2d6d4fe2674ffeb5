//! Train command implementation.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result as AnyhowResult;
use clap::Parser;

use pairforge_core::ByteFallbackMap;
use pairforge_tokenizer::ModelSaver;
use pairforge_training::{MergeEngine, TrainingConfig};

use super::{corpus_builder, ModeArg, NormalizeArg};

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus file
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: String,

    /// Target vocabulary size
    #[arg(short, long, default_value_t = 30_000)]
    pub vocab_size: usize,

    /// Maximum number of merge rounds
    #[arg(long)]
    pub max_rounds: Option<usize>,

    /// Minimum pair frequency for a merge
    #[arg(short, long, default_value_t = 1)]
    pub min_frequency: u64,

    /// Initial-symbol granularity
    #[arg(long, value_enum, default_value_t = ModeArg::Byte)]
    pub mode: ModeArg,

    /// Unicode normalization applied before splitting
    #[arg(long, value_enum, default_value_t = NormalizeArg::None)]
    pub normalize: NormalizeArg,

    /// Append a </w> marker to every word
    #[arg(long)]
    pub end_of_word: bool,

    /// Disable parallel pair counting
    #[arg(long)]
    pub sequential: bool,
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    println!("Training vocabulary...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    println!("  Vocab size: {}", cmd.vocab_size);
    println!();

    let start = Instant::now();
    let text = fs::read_to_string(&cmd.input)?;
    println!(
        "Read {} bytes in {:.2}s",
        text.len(),
        start.elapsed().as_secs_f64()
    );

    let builder = corpus_builder(cmd.mode, cmd.normalize, cmd.end_of_word)?;
    let store = builder.count_words(&text)?;
    println!(
        "Counted {} words ({} distinct)",
        store.corpus_words(),
        store.len()
    );

    let config = TrainingConfig {
        target_vocab_size: cmd.vocab_size,
        max_rounds: cmd.max_rounds.unwrap_or(usize::MAX),
        min_frequency: cmd.min_frequency,
        parallel: !cmd.sequential,
    };

    let start = Instant::now();
    let model = MergeEngine::new(store, config)?.train()?;
    println!(
        "Trained {} merges, {} symbols in {:.2}s",
        model.merges.len(),
        model.vocabulary.len(),
        start.elapsed().as_secs_f64()
    );

    let fallback = ByteFallbackMap::new()?;
    let output = Path::new(&cmd.output);
    ModelSaver::new(&model.vocabulary, &model.merges, &fallback).save(output)?;
    println!("Model saved to {}", cmd.output);

    Ok(())
}
