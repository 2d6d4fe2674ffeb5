//! Pairforge-training - BPE vocabulary training
//!
//! This crate drives training: it derives per-round pair-frequency tables
//! from a vocabulary store and iteratively merges the most frequent pair
//! until a stop condition is reached.
//!
//! # Example
//!
//! ```rust
//! use pairforge_core::VocabularyStore;
//! use pairforge_training::{MergeEngine, TrainingConfig};
//!
//! let mut store = VocabularyStore::new();
//! store.add_word_count("newest", vec!["n".into(), "e".into(), "w".into(),
//!     "e".into(), "s".into(), "t".into()], 6)?;
//!
//! let config = TrainingConfig { max_rounds: 3, ..TrainingConfig::default() };
//! let model = MergeEngine::new(store, config)?.train()?;
//! assert_eq!(model.merges.len(), 3);
//! # Ok::<(), pairforge_core::TrainerError>(())
//! ```

pub use pairforge_core::{Result, TrainerError};

pub mod training;
pub use training::{
    EngineState, MergeEngine, PairCandidate, PairStats, TrainedModel, TrainingConfig,
};
