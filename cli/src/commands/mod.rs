//! CLI subcommand implementations.

pub mod inspect;
pub mod stats;
pub mod train;

pub use inspect::InspectCommand;
pub use stats::StatsCommand;
pub use train::TrainCommand;

use clap::ValueEnum;
use pairforge_core::Result;
use pairforge_tokenizer::{CorpusBuilder, DecomposeMode, Decomposer, Normalization, Splitter};

/// Initial-symbol granularity, from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Byte,
    Codepoint,
    Grapheme,
}

impl From<ModeArg> for DecomposeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Byte => DecomposeMode::Byte,
            ModeArg::Codepoint => DecomposeMode::Codepoint,
            ModeArg::Grapheme => DecomposeMode::Grapheme,
        }
    }
}

/// Normalization form, from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NormalizeArg {
    None,
    Nfc,
    Nfkc,
}

impl From<NormalizeArg> for Normalization {
    fn from(arg: NormalizeArg) -> Self {
        match arg {
            NormalizeArg::None => Normalization::None,
            NormalizeArg::Nfc => Normalization::Nfc,
            NormalizeArg::Nfkc => Normalization::Nfkc,
        }
    }
}

/// Assemble the corpus pipeline shared by `train` and `stats`.
pub fn corpus_builder(
    mode: ModeArg,
    normalize: NormalizeArg,
    end_of_word: bool,
) -> Result<CorpusBuilder> {
    Ok(CorpusBuilder::new(
        Splitter::whitespace(),
        normalize.into(),
        Decomposer::new(mode.into(), end_of_word)?,
    ))
}
