//! Pairforge-core - Core BPE vocabulary-training data structures
//!
//! This crate provides the fundamental pieces of the training engine: the
//! open-addressing hash table keyed on byte-strings, the vocabulary store
//! (word multiset), the final symbol/id vocabulary, merge rules, and the
//! byte-fallback table.
//!
//! # Example
//!
//! ```rust
//! use pairforge_core::{HashTable, VocabularyStore};
//!
//! let mut counts: HashTable<u64> = HashTable::new();
//! counts.insert(b"e s", 9)?;
//! assert_eq!(counts.get(b"e s"), Some(&9));
//!
//! let mut store = VocabularyStore::new();
//! store.add_word_count("low", vec!["l".into(), "o".into(), "w".into()], 5)?;
//! # Ok::<(), pairforge_core::TrainerError>(())
//! ```

pub mod error;
pub use error::{Result, TrainerError};

pub mod table;
pub use table::HashTable;

pub mod core;
pub use core::merges::{pair_key, split_pair_key, validate_symbol};
pub use core::{
    ByteFallbackMap, MergeList, MergeRule, Vocab, VocabR, Vocabulary, VocabularyEntry,
    VocabularyStore, PAIR_SEPARATOR,
};
