//! Unicode normalization applied before splitting.

use unicode_normalization::UnicodeNormalization;

/// Normalization form applied to the raw corpus text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// No normalization
    #[default]
    None,
    /// Canonical composition
    Nfc,
    /// Compatibility composition
    Nfkc,
}

impl Normalization {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Normalization::None => text.to_string(),
            Normalization::Nfc => text.nfc().collect(),
            Normalization::Nfkc => text.nfkc().collect(),
        }
    }
}
