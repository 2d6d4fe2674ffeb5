//! Text splitting for pre-tokenization.
//!
//! Splits raw text into the initial word units the trainer counts. The
//! default splits on whitespace; a custom regex pattern can be supplied for
//! corpora with other word boundaries.

use regex::Regex;

use pairforge_core::{Result, TrainerError};

/// Word splitter applied before decomposition.
pub struct Splitter {
    pattern: Option<Regex>,
}

impl Splitter {
    /// Split on whitespace runs.
    pub fn whitespace() -> Self {
        Self { pattern: None }
    }

    /// Split on a custom regex pattern.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| TrainerError::InvalidConfig(format!("bad split pattern: {e}")))?;
        Ok(Self {
            pattern: Some(regex),
        })
    }

    /// Split text into words, dropping empty fragments.
    pub fn split<'a>(&'a self, text: &'a str) -> Vec<&'a str> {
        match &self.pattern {
            None => text.split_whitespace().collect(),
            Some(regex) => regex.split(text).filter(|w| !w.is_empty()).collect(),
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::whitespace()
    }
}
