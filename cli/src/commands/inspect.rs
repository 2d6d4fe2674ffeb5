//! Inspect command implementation.

use std::path::Path;

use anyhow::Result as AnyhowResult;
use clap::Parser;

use pairforge_tokenizer::ModelLoader;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Directory containing a saved model
    #[arg(short, long)]
    pub model: String,

    /// How many merges to preview
    #[arg(short = 'n', long, default_value_t = 10)]
    pub preview: usize,
}

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let (vocabulary, merges, fallback) = ModelLoader::load(Path::new(&cmd.model))?;

    println!("Model: {}", cmd.model);
    println!("  Symbols: {}", vocabulary.len());
    println!("  Merges: {}", merges.len());
    println!("  Byte fallback: <0x00>..{}", fallback.token(0xFF));
    println!();

    println!("First merges:");
    for rule in merges.iter().take(cmd.preview) {
        println!(
            "  {:>6}  {} + {} -> {}",
            rule.rank, rule.left, rule.right, rule.merged
        );
    }

    Ok(())
}
