//! Pair-frequency accounting.
//!
//! Each merge round derives a fresh table mapping adjacent-symbol-pair keys
//! to summed frequency from the current vocabulary store. Stale counts do
//! not survive a merge, so the whole table is rebuilt (and dropped) every
//! round.

use std::cmp::Ordering;

use compact_str::CompactString;
use dary_heap::OctonaryHeap;
use rayon::prelude::*;

use pairforge_core::{
    pair_key, split_pair_key, validate_symbol, HashTable, Result, VocabularyEntry,
    VocabularyStore, PAIR_SEPARATOR,
};

/// An adjacent symbol pair with its summed corpus frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCandidate {
    pub left: CompactString,
    pub right: CompactString,
    pub count: u64,
}

impl PairCandidate {
    fn key_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.left
            .bytes()
            .chain(std::iter::once(PAIR_SEPARATOR))
            .chain(self.right.bytes())
    }
}

/// Higher count wins; ties go to the lexicographically smallest pair key.
/// This ordering is the single source of selection determinism - hash-table
/// iteration order never decides a merge.
impl Ord for PairCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.key_bytes().cmp(self.key_bytes()))
    }
}

impl PartialOrd for PairCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pair-key -> summed frequency for one merge round.
pub struct PairStats {
    table: HashTable<u64>,
}

impl PairStats {
    /// Scan every store entry sequentially.
    pub fn collect(store: &VocabularyStore) -> Result<Self> {
        let mut table = HashTable::new();
        for entry in store.entries() {
            accumulate(&mut table, entry)?;
        }
        Ok(Self { table })
    }

    /// Shard the per-word scan across worker threads, each producing a local
    /// table, then combine. Addition is commutative, so the result is
    /// identical to the sequential scan regardless of thread scheduling.
    pub fn collect_parallel(store: &VocabularyStore) -> Result<Self> {
        let entries: Vec<&VocabularyEntry> = store.entries().collect();
        let table = entries
            .par_iter()
            .copied()
            .try_fold(HashTable::new, |mut local, entry| {
                accumulate(&mut local, entry)?;
                Ok(local)
            })
            .try_reduce(HashTable::new, absorb)?;
        Ok(Self { table })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Summed frequency for one pair.
    pub fn get(&self, left: &str, right: &str) -> Option<u64> {
        self.table.get(&pair_key(left, right)).copied()
    }

    /// The pair every round merges: maximum frequency, deterministic
    /// tie-break per `PairCandidate`'s ordering.
    pub fn best(&self) -> Option<PairCandidate> {
        let mut best: Option<(&[u8], u64)> = None;
        for (key, &count) in self.table.iter() {
            let better = match best {
                None => true,
                // Same comparison PairCandidate::cmp encodes, without
                // materializing a candidate per slot.
                Some((best_key, best_count)) => match count.cmp(&best_count) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => key < best_key,
                },
            };
            if better {
                best = Some((key, count));
            }
        }
        best.and_then(|(key, count)| candidate(key, count))
    }

    /// The `n` most frequent pairs in selection order.
    pub fn top_n(&self, n: usize) -> Vec<PairCandidate> {
        let mut heap = OctonaryHeap::with_capacity(self.table.len());
        for (key, &count) in self.table.iter() {
            if let Some(c) = candidate(key, count) {
                heap.push(c);
            }
        }
        let mut out = Vec::with_capacity(n.min(heap.len()));
        for _ in 0..n {
            match heap.pop() {
                Some(c) => out.push(c),
                None => break,
            }
        }
        out
    }

    /// All pairs in slot order. Carries no semantic ordering; use only for
    /// commutative accumulation or tests.
    pub fn iter(&self) -> impl Iterator<Item = (PairCandidate, u64)> + '_ {
        self.table
            .iter()
            .filter_map(|(key, &count)| candidate(key, count).map(|c| (c, count)))
    }
}

fn candidate(key: &[u8], count: u64) -> Option<PairCandidate> {
    let (left, right) = split_pair_key(key)?;
    Some(PairCandidate {
        left: CompactString::from(left),
        right: CompactString::from(right),
        count,
    })
}

/// Add one entry's adjacent pairs into `table`, weighted by the entry's
/// frequency. Every adjacent occurrence counts, including overlapping
/// repeats within one word. Words with fewer than two symbols contribute
/// nothing.
fn accumulate(table: &mut HashTable<u64>, entry: &VocabularyEntry) -> Result<()> {
    let symbols = entry.symbols();
    if symbols.len() < 2 {
        return Ok(());
    }
    for symbol in symbols {
        validate_symbol(symbol)?;
    }
    let frequency = entry.frequency();
    for window in symbols.windows(2) {
        let key = pair_key(&window[0], &window[1]);
        match table.get_mut(&key) {
            Some(count) => *count += frequency,
            None => table.insert(&key, frequency)?,
        }
    }
    Ok(())
}

/// Fold one local table into another.
fn absorb(mut into: HashTable<u64>, from: HashTable<u64>) -> Result<HashTable<u64>> {
    for (key, count) in from.into_entries() {
        match into.get_mut(&key) {
            Some(total) => *total += count,
            None => into.insert(&key, count)?,
        }
    }
    Ok(into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn store(words: &[(&str, &str, u64)]) -> VocabularyStore {
        let mut store = VocabularyStore::new();
        for (word, spaced, count) in words {
            let symbols: Vec<CompactString> =
                spaced.split_whitespace().map(CompactString::from).collect();
            store.add_word_count(word, symbols, *count).unwrap();
        }
        store
    }

    fn reference_corpus() -> VocabularyStore {
        store(&[
            ("low", "l o w", 5),
            ("lower", "l o w e r", 2),
            ("newest", "n e w e s t", 6),
            ("widest", "w i d e s t", 3),
        ])
    }

    #[test]
    fn test_hand_computed_sums() {
        let stats = PairStats::collect(&reference_corpus()).unwrap();

        assert_eq!(stats.get("e", "s"), Some(9));
        assert_eq!(stats.get("s", "t"), Some(9));
        assert_eq!(stats.get("w", "e"), Some(8));
        assert_eq!(stats.get("l", "o"), Some(7));
        assert_eq!(stats.get("o", "w"), Some(7));
        assert_eq!(stats.get("n", "e"), Some(6));
        assert_eq!(stats.get("e", "r"), Some(2));
        assert_eq!(stats.get("s", "e"), None);
    }

    #[test]
    fn test_best_breaks_ties_lexicographically() {
        // ("e","s") and ("s","t") both sum to 9; "e s" < "s t".
        let stats = PairStats::collect(&reference_corpus()).unwrap();
        let best = stats.best().unwrap();

        assert_eq!(best.left, "e");
        assert_eq!(best.right, "s");
        assert_eq!(best.count, 9);
    }

    #[test]
    fn test_overlapping_repeats_all_count() {
        let stats = PairStats::collect(&store(&[("aaa", "a a a", 2)])).unwrap();
        // Two overlapping (a,a) windows, each weighted by frequency 2.
        assert_eq!(stats.get("a", "a"), Some(4));
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn test_single_symbol_words_contribute_nothing() {
        let stats = PairStats::collect(&store(&[("a", "a", 100)])).unwrap();
        assert!(stats.is_empty());
        assert!(stats.best().is_none());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corpus = reference_corpus();
        let sequential = PairStats::collect(&corpus).unwrap();
        let parallel = PairStats::collect_parallel(&corpus).unwrap();

        assert_eq!(sequential.len(), parallel.len());
        for (candidate, count) in sequential.iter() {
            assert_eq!(parallel.get(&candidate.left, &candidate.right), Some(count));
        }
    }

    #[test]
    fn test_top_n_selection_order() {
        let stats = PairStats::collect(&reference_corpus()).unwrap();
        let top = stats.top_n(4);

        let pairs: Vec<(&str, &str, u64)> = top
            .iter()
            .map(|c| (c.left.as_str(), c.right.as_str(), c.count))
            .collect();
        assert_eq!(
            pairs,
            vec![("e", "s", 9), ("s", "t", 9), ("w", "e", 8), ("l", "o", 7)]
        );
    }

    #[test]
    fn test_candidate_ordering() {
        let a = PairCandidate {
            left: "e".into(),
            right: "s".into(),
            count: 9,
        };
        let b = PairCandidate {
            left: "s".into(),
            right: "t".into(),
            count: 9,
        };
        let c = PairCandidate {
            left: "z".into(),
            right: "z".into(),
            count: 10,
        };

        // Equal counts: smaller key is the greater candidate.
        assert!(a > b);
        // Higher count always wins.
        assert!(c > a);
    }
}
