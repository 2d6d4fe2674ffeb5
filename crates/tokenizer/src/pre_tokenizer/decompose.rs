//! Decomposition of a word into its initial symbols.
//!
//! Training starts from one symbol per byte, codepoint, or grapheme
//! cluster; merges coalesce from there. Byte mode emits the canonical
//! `<0xXX>` fallback tokens so every input is representable and no symbol
//! can collide with the pair separator.

use compact_str::{CompactString, ToCompactString};
use unicode_segmentation::UnicodeSegmentation;

use pairforge_core::{ByteFallbackMap, Result};

/// Marker symbol appended to a word's decomposition when end-of-word
/// tracking is enabled.
pub const END_OF_WORD: &str = "</w>";

/// Granularity of the initial symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecomposeMode {
    /// One `<0xXX>` fallback token per byte.
    #[default]
    Byte,
    /// One symbol per Unicode codepoint.
    Codepoint,
    /// One symbol per grapheme cluster.
    Grapheme,
}

/// Word decomposer.
pub struct Decomposer {
    mode: DecomposeMode,
    end_of_word: bool,
    fallback: ByteFallbackMap,
}

impl Decomposer {
    pub fn new(mode: DecomposeMode, end_of_word: bool) -> Result<Self> {
        Ok(Self {
            mode,
            end_of_word,
            fallback: ByteFallbackMap::new()?,
        })
    }

    pub fn mode(&self) -> DecomposeMode {
        self.mode
    }

    /// Decompose a word into its initial symbol sequence.
    pub fn decompose(&self, word: &str) -> Vec<CompactString> {
        let mut symbols: Vec<CompactString> = match self.mode {
            DecomposeMode::Byte => word
                .bytes()
                .map(|b| CompactString::from(self.fallback.token(b)))
                .collect(),
            DecomposeMode::Codepoint => {
                word.chars().map(|c| c.to_compact_string()).collect()
            }
            DecomposeMode::Grapheme => word
                .graphemes(true)
                .map(CompactString::from)
                .collect(),
        };
        if self.end_of_word && !symbols.is_empty() {
            symbols.push(CompactString::const_new(END_OF_WORD));
        }
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_mode_emits_fallback_tokens() {
        let decomposer = Decomposer::new(DecomposeMode::Byte, false).unwrap();
        let symbols = decomposer.decompose("ab");
        assert_eq!(symbols, ["<0x61>", "<0x62>"]);
    }

    #[test]
    fn test_codepoint_mode() {
        let decomposer = Decomposer::new(DecomposeMode::Codepoint, false).unwrap();
        assert_eq!(decomposer.decompose("low"), ["l", "o", "w"]);
        // One symbol per codepoint, multi-byte included.
        assert_eq!(decomposer.decompose("héllo").len(), 5);
    }

    #[test]
    fn test_grapheme_mode_keeps_clusters_whole() {
        let decomposer = Decomposer::new(DecomposeMode::Grapheme, false).unwrap();
        // e + combining accent is one grapheme cluster but two codepoints.
        let symbols = decomposer.decompose("e\u{0301}x");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[1], "x");
    }

    #[test]
    fn test_end_of_word_marker() {
        let decomposer = Decomposer::new(DecomposeMode::Codepoint, true).unwrap();
        assert_eq!(decomposer.decompose("low"), ["l", "o", "w", END_OF_WORD]);
        assert!(decomposer.decompose("").is_empty());
    }
}
