//! Corpus preparation: raw text -> populated vocabulary store.

use pairforge_core::{Result, TrainerError, VocabularyStore};

use crate::pre_tokenizer::{Decomposer, Normalization, Splitter};

/// Builds a vocabulary store from raw corpus text.
pub struct CorpusBuilder {
    splitter: Splitter,
    normalization: Normalization,
    decomposer: Decomposer,
}

impl CorpusBuilder {
    pub fn new(
        splitter: Splitter,
        normalization: Normalization,
        decomposer: Decomposer,
    ) -> Self {
        Self {
            splitter,
            normalization,
            decomposer,
        }
    }

    /// Normalize, split, decompose, and count every word of `text`.
    ///
    /// An empty corpus (no words after splitting) is rejected with
    /// `InvalidInput` before any store is built.
    pub fn count_words(&self, text: &str) -> Result<VocabularyStore> {
        let normalized = self.normalization.apply(text);
        let words = self.splitter.split(&normalized);
        if words.is_empty() {
            return Err(TrainerError::InvalidInput("empty corpus".into()));
        }

        let mut store = VocabularyStore::new();
        for word in words {
            store.add_word(word, self.decomposer.decompose(word))?;
        }
        log::debug!(
            "counted {} corpus words, {} distinct",
            store.corpus_words(),
            store.len()
        );
        Ok(store)
    }
}
