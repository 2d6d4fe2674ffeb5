//! Stats command implementation.

use std::fs;

use anyhow::Result as AnyhowResult;
use clap::Parser;

use pairforge_training::PairStats;

use super::{corpus_builder, ModeArg, NormalizeArg};

/// Stats command arguments.
#[derive(Parser)]
pub struct StatsCommand {
    /// Path to the corpus file
    #[arg(short, long)]
    pub input: String,

    /// How many pairs to show
    #[arg(short = 'n', long, default_value_t = 20)]
    pub top: usize,

    /// Initial-symbol granularity
    #[arg(long, value_enum, default_value_t = ModeArg::Byte)]
    pub mode: ModeArg,

    /// Unicode normalization applied before splitting
    #[arg(long, value_enum, default_value_t = NormalizeArg::None)]
    pub normalize: NormalizeArg,

    /// Append a </w> marker to every word
    #[arg(long)]
    pub end_of_word: bool,
}

pub fn run(cmd: StatsCommand) -> AnyhowResult<()> {
    let text = fs::read_to_string(&cmd.input)?;
    let builder = corpus_builder(cmd.mode, cmd.normalize, cmd.end_of_word)?;
    let store = builder.count_words(&text)?;
    let stats = PairStats::collect_parallel(&store)?;

    println!(
        "{} distinct pairs over {} words",
        stats.len(),
        store.corpus_words()
    );
    for candidate in stats.top_n(cmd.top) {
        println!(
            "{:>12}  {} {}",
            candidate.count, candidate.left, candidate.right
        );
    }

    Ok(())
}
