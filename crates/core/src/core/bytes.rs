//! Byte-fallback table.
//!
//! Maps every raw byte value 0-255 to a canonical `<0xXX>` placeholder token
//! and back, so any byte is representable even when no learned merge covers
//! it. Construction is all-or-nothing: a gap would break the round-trip
//! guarantee, so a single failed insertion fails the whole map.

use compact_str::{format_compact, CompactString};

use crate::error::{Result, TrainerError};
use crate::table::HashTable;

/// Bijective byte <-> placeholder-token table. Immutable once built.
pub struct ByteFallbackMap {
    /// byte -> token, indexed by byte value.
    tokens: Vec<CompactString>,
    /// token -> byte.
    inverse: HashTable<u8>,
}

impl ByteFallbackMap {
    /// Build the full 256-entry table.
    pub fn new() -> Result<Self> {
        let mut tokens = Vec::with_capacity(256);
        let mut inverse = HashTable::with_capacity(512)?;
        for value in 0..=255u8 {
            let token = format_compact!("<0x{value:02X}>");
            inverse.insert(token.as_bytes(), value)?;
            tokens.push(token);
        }
        debug_assert_eq!(inverse.len(), 256);
        Ok(Self { tokens, inverse })
    }

    /// Placeholder token for a byte value.
    #[inline]
    pub fn token(&self, byte: u8) -> &str {
        &self.tokens[byte as usize]
    }

    /// Byte value for a placeholder token, if it is one.
    #[inline]
    pub fn byte(&self, token: &str) -> Option<u8> {
        self.inverse.get(token.as_bytes()).copied()
    }

    /// Encode a byte string as placeholder tokens.
    pub fn encode(&self, bytes: &[u8]) -> Vec<&str> {
        bytes.iter().map(|&b| self.token(b)).collect()
    }

    /// Decode placeholder tokens back to bytes. A token that is not in the
    /// table is an error, never a silent gap.
    pub fn decode<'a, I>(&self, tokens: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .map(|token| {
                self.byte(token)
                    .ok_or_else(|| TrainerError::UnknownToken(token.to_string()))
            })
            .collect()
    }
}
