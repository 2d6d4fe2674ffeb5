//! The merge engine: the training loop proper.
//!
//! Repeatedly selects the highest-frequency adjacent pair, splices it into
//! every word containing it, and records the merge rule, until no pairs
//! remain, the target vocabulary size is reached, or the round budget is
//! exhausted.

use ahash::AHashSet;
use compact_str::CompactString;

use pairforge_core::{MergeList, Result, TrainerError, Vocabulary, VocabularyStore};

use super::stats::PairStats;

/// Training parameters.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Stop once this many distinct symbols exist.
    pub target_vocab_size: usize,
    /// Maximum number of merge rounds; the natural loop bound.
    pub max_rounds: usize,
    /// Stop once the best pair's summed frequency falls below this.
    /// The default of 1 never triggers.
    pub min_frequency: u64,
    /// Shard pair counting across worker threads.
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            target_vocab_size: 30_000,
            max_rounds: usize::MAX,
            min_frequency: 1,
            parallel: true,
        }
    }
}

/// Engine lifecycle. One-way: once `Terminated`, a `step` is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Terminated,
}

/// Everything training produces. The merge list alone reproduces training
/// order; the vocabulary alone cannot encode unseen text.
pub struct TrainedModel {
    /// Every distinct symbol that ever existed, mapped to an integer id.
    pub vocabulary: Vocabulary,
    /// Ordered merge rules, rank order.
    pub merges: MergeList,
}

/// BPE merge-loop state machine over a vocabulary store.
pub struct MergeEngine {
    store: VocabularyStore,
    config: TrainingConfig,
    merges: MergeList,
    /// Distinct initial symbols, lexicographic order. Pins id assignment.
    initial_symbols: Vec<CompactString>,
    /// All symbols seen so far, for the vocabulary-size stop condition.
    known_symbols: AHashSet<CompactString>,
    state: EngineState,
}

impl MergeEngine {
    /// Create an engine over a populated store. An empty corpus is rejected
    /// up front.
    pub fn new(store: VocabularyStore, config: TrainingConfig) -> Result<Self> {
        if store.is_empty() {
            return Err(TrainerError::InvalidInput("empty corpus".into()));
        }
        let mut known_symbols = AHashSet::new();
        for entry in store.entries() {
            for symbol in entry.symbols() {
                known_symbols.insert(symbol.clone());
            }
        }
        let mut initial_symbols: Vec<CompactString> =
            known_symbols.iter().cloned().collect();
        initial_symbols.sort_unstable();

        Ok(Self {
            store,
            config,
            merges: MergeList::new(),
            initial_symbols,
            known_symbols,
            state: EngineState::Running,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn merges(&self) -> &MergeList {
        &self.merges
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    /// Run one merge round. Returns the state after the round.
    pub fn step(&mut self) -> Result<EngineState> {
        if self.state == EngineState::Terminated {
            return Ok(self.state);
        }
        if self.budget_exhausted() {
            self.state = EngineState::Terminated;
            return Ok(self.state);
        }

        let stats = if self.config.parallel {
            PairStats::collect_parallel(&self.store)?
        } else {
            PairStats::collect(&self.store)?
        };

        let Some(best) = stats.best() else {
            // No pairs left to merge.
            self.state = EngineState::Terminated;
            return Ok(self.state);
        };
        if best.count < self.config.min_frequency {
            self.state = EngineState::Terminated;
            return Ok(self.state);
        }
        // The round's pair table is stale the moment we splice; release it.
        drop(stats);

        let mut merged = CompactString::with_capacity(best.left.len() + best.right.len());
        merged.push_str(&best.left);
        merged.push_str(&best.right);

        let mut sites = 0;
        for entry in self.store.entries_mut() {
            sites += entry.merge_adjacent(&best.left, &best.right, &merged);
        }

        let rank = self.merges.push(best.left, best.right);
        self.known_symbols.insert(merged.clone());
        log::debug!(
            "merge {rank}: {:?} -> {merged:?} (freq {}, {sites} sites)",
            self.merges.get(rank).map(|r| (&r.left, &r.right)),
            best.count,
        );

        self.store.check_conservation()?;

        if self.budget_exhausted() {
            self.state = EngineState::Terminated;
        }
        Ok(self.state)
    }

    fn budget_exhausted(&self) -> bool {
        self.merges.len() >= self.config.max_rounds
            || self.known_symbols.len() >= self.config.target_vocab_size
    }

    /// Run rounds until termination, then build the final artifacts.
    pub fn train(mut self) -> Result<TrainedModel> {
        while self.state == EngineState::Running {
            self.step()?;
        }
        log::info!(
            "training done: {} merges, {} symbols, {} corpus words",
            self.merges.len(),
            self.known_symbols.len(),
            self.store.corpus_words(),
        );
        Ok(self.finish())
    }

    /// Assemble the vocabulary: initial symbols in lexicographic order, then
    /// merged symbols in rank order. Deterministic regardless of hash-table
    /// iteration order.
    fn finish(self) -> TrainedModel {
        let mut vocabulary =
            Vocabulary::with_capacity(self.initial_symbols.len() + self.merges.len());
        for symbol in &self.initial_symbols {
            vocabulary.add_symbol(symbol);
        }
        for rule in self.merges.iter() {
            vocabulary.add_symbol(&rule.merged);
        }

        // Frequency-weighted occurrence counts over the final store state.
        let mut freqs = vec![0u64; vocabulary.len()];
        for entry in self.store.entries() {
            for symbol in entry.symbols() {
                if let Some(id) = vocabulary.get_id(symbol) {
                    freqs[id as usize] += entry.frequency();
                }
            }
        }
        for (id, freq) in freqs.into_iter().enumerate() {
            vocabulary.set_frequency(id as u32, freq);
        }

        TrainedModel {
            vocabulary,
            merges: self.merges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_store() -> VocabularyStore {
        let mut store = VocabularyStore::new();
        for (word, spaced, count) in [
            ("low", "l o w", 5u64),
            ("lower", "l o w e r", 2),
            ("newest", "n e w e s t", 6),
            ("widest", "w i d e s t", 3),
        ] {
            let symbols: Vec<CompactString> =
                spaced.split_whitespace().map(CompactString::from).collect();
            store.add_word_count(word, symbols, count).unwrap();
        }
        store
    }

    fn config(max_rounds: usize) -> TrainingConfig {
        TrainingConfig {
            max_rounds,
            parallel: false,
            ..TrainingConfig::default()
        }
    }

    #[test]
    fn test_first_three_merges_match_hand_computation() {
        let engine = MergeEngine::new(reference_store(), config(3)).unwrap();
        let model = engine.train().unwrap();

        let picks: Vec<(&str, &str, &str)> = model
            .merges
            .iter()
            .map(|r| (r.left.as_str(), r.right.as_str(), r.merged.as_str()))
            .collect();
        assert_eq!(
            picks,
            vec![("e", "s", "es"), ("es", "t", "est"), ("l", "o", "lo")]
        );
    }

    #[test]
    fn test_zero_round_budget_is_idempotent() {
        let mut engine = MergeEngine::new(reference_store(), config(0)).unwrap();
        assert_eq!(engine.step().unwrap(), EngineState::Terminated);
        assert!(engine.merges().is_empty());

        // Every entry still carries its initial decomposition.
        let lengths: Vec<usize> = {
            let mut v: Vec<usize> = engine
                .store()
                .entries()
                .map(|e| e.symbols().len())
                .collect();
            v.sort_unstable();
            v
        };
        assert_eq!(lengths, vec![3, 5, 6, 6]);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let result = MergeEngine::new(VocabularyStore::new(), config(10));
        assert!(matches!(result, Err(TrainerError::InvalidInput(_))));
    }

    #[test]
    fn test_training_is_deterministic() {
        let first = MergeEngine::new(reference_store(), config(8))
            .unwrap()
            .train()
            .unwrap();
        let second = MergeEngine::new(reference_store(), config(8))
            .unwrap()
            .train()
            .unwrap();

        assert_eq!(first.merges, second.merges);
        let ids_a: Vec<(u32, String)> = first
            .vocabulary
            .iter()
            .map(|(id, s, _)| (id, s.to_string()))
            .collect();
        let ids_b: Vec<(u32, String)> = second
            .vocabulary
            .iter()
            .map(|(id, s, _)| (id, s.to_string()))
            .collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_parallel_matches_sequential_training() {
        let sequential = MergeEngine::new(reference_store(), config(8))
            .unwrap()
            .train()
            .unwrap();
        let parallel = MergeEngine::new(
            reference_store(),
            TrainingConfig {
                max_rounds: 8,
                parallel: true,
                ..TrainingConfig::default()
            },
        )
        .unwrap()
        .train()
        .unwrap();

        assert_eq!(sequential.merges, parallel.merges);
    }

    #[test]
    fn test_byte_conservation_through_training() {
        let store = reference_store();
        let corpus_bytes = store.corpus_bytes();
        let model = MergeEngine::new(store, config(10)).unwrap().train().unwrap();

        // Merges never gain or lose bytes: the frequency-weighted symbol
        // byte total still covers the corpus exactly.
        assert_eq!(model.vocabulary.weighted_byte_total(), corpus_bytes);
    }

    #[test]
    fn test_target_vocab_size_stops_training() {
        let store = reference_store();
        let initial_symbols = 10; // d e i l n o r s t w
        let engine = MergeEngine::new(
            store,
            TrainingConfig {
                target_vocab_size: initial_symbols + 2,
                parallel: false,
                ..TrainingConfig::default()
            },
        )
        .unwrap();
        let model = engine.train().unwrap();

        assert_eq!(model.merges.len(), 2);
        assert_eq!(model.vocabulary.len(), initial_symbols + 2);
    }

    #[test]
    fn test_min_frequency_stops_training() {
        let engine = MergeEngine::new(
            reference_store(),
            TrainingConfig {
                min_frequency: 8,
                parallel: false,
                ..TrainingConfig::default()
            },
        )
        .unwrap();
        let model = engine.train().unwrap();

        // Only (e,s)=9 and (es,t)=9 reach frequency 8.
        assert_eq!(model.merges.len(), 2);
    }

    #[test]
    fn test_vocabulary_ids_cover_initial_then_merged() {
        let model = MergeEngine::new(reference_store(), config(2))
            .unwrap()
            .train()
            .unwrap();

        // Initial symbols first, lexicographic.
        assert_eq!(model.vocabulary.get_symbol(0), Some("d"));
        assert_eq!(model.vocabulary.get_id("w"), Some(9));
        // Merged symbols follow in rank order.
        assert_eq!(model.vocabulary.get_id("es"), Some(10));
        assert_eq!(model.vocabulary.get_id("est"), Some(11));
    }
}
