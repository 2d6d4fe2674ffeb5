//! Pairforge-tokenizer - Corpus preparation and artifact persistence
//!
//! This crate supplies the collaborators the training core consumes
//! (splitting, normalization, decomposition into initial symbols) and the
//! persistence layer for the three trained artifacts: vocabulary, merge
//! rules, and the byte-fallback table.
//!
//! # Example
//!
//! ```rust
//! use pairforge_tokenizer::{CorpusBuilder, DecomposeMode, Decomposer,
//!     Normalization, Splitter};
//!
//! let builder = CorpusBuilder::new(
//!     Splitter::whitespace(),
//!     Normalization::Nfc,
//!     Decomposer::new(DecomposeMode::Codepoint, false)?,
//! );
//! let store = builder.count_words("low low lower")?;
//! assert_eq!(store.corpus_words(), 3);
//! # Ok::<(), pairforge_tokenizer::TrainerError>(())
//! ```

pub use pairforge_core::{Result, TrainerError};

pub mod pre_tokenizer;
pub use pre_tokenizer::{DecomposeMode, Decomposer, Normalization, Splitter, END_OF_WORD};

pub mod corpus;
pub use corpus::CorpusBuilder;

pub mod io;
pub use io::{ModelLoader, ModelSaver};
