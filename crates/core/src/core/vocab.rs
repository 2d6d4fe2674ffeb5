//! Final vocabulary artifact: symbol <-> integer id.
//!
//! Uses AHashMap for fast lookups and CompactString for memory-efficient
//! symbol storage. Ids are assigned densely in insertion order, so training
//! controls id determinism by inserting symbols in a fixed order.

use ahash::AHashMap;
use compact_str::CompactString;

/// Forward mapping: symbol -> id
pub type Vocab = AHashMap<CompactString, u32>;

/// Reverse mapping: id -> symbol
pub type VocabR = AHashMap<u32, CompactString>;

/// Bidirectional symbol/id mapping with per-id corpus frequencies.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    vocab: Vocab,
    vocab_r: VocabR,
    /// Frequency-weighted occurrence count per id, indexed by id.
    freqs: Vec<u64>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vocab: Vocab::with_capacity(capacity),
            vocab_r: VocabR::with_capacity(capacity),
            freqs: Vec::with_capacity(capacity),
        }
    }

    /// Add a symbol, returning its id. Adding an existing symbol returns the
    /// id it already holds.
    pub fn add_symbol(&mut self, symbol: &str) -> u32 {
        if let Some(&id) = self.vocab.get(symbol) {
            return id;
        }
        let id = self.freqs.len() as u32;
        let symbol = CompactString::from(symbol);
        self.vocab_r.insert(id, symbol.clone());
        self.vocab.insert(symbol, id);
        self.freqs.push(0);
        id
    }

    pub fn set_frequency(&mut self, id: u32, frequency: u64) {
        if let Some(slot) = self.freqs.get_mut(id as usize) {
            *slot = frequency;
        }
    }

    #[inline]
    pub fn get_id(&self, symbol: &str) -> Option<u32> {
        self.vocab.get(symbol).copied()
    }

    #[inline]
    pub fn get_symbol(&self, id: u32) -> Option<&str> {
        self.vocab_r.get(&id).map(|s| s.as_str())
    }

    #[inline]
    pub fn frequency(&self, id: u32) -> u64 {
        self.freqs.get(id as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Iterate `(id, symbol, frequency)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str, u64)> {
        (0..self.freqs.len() as u32).map(|id| {
            let symbol = self
                .vocab_r
                .get(&id)
                .map(|s| s.as_str())
                .unwrap_or_default();
            (id, symbol, self.freqs[id as usize])
        })
    }

    /// Sum over symbols of byte-length times frequency. For a freshly
    /// trained vocabulary this equals the corpus byte total.
    pub fn weighted_byte_total(&self) -> u64 {
        self.iter()
            .map(|(_, symbol, freq)| symbol.len() as u64 * freq)
            .sum()
    }
}
