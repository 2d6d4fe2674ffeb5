//! Error types for the vocabulary-training library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vocabulary training.
#[derive(Error, Debug)]
pub enum TrainerError {
    /// A dynamic memory request failed. Fatal for the current operation;
    /// no partial state is left behind when this is returned.
    #[error("Allocation failure")]
    AllocationFailure,

    /// The hash table exhausted its probe budget even after growing.
    #[error("Hash table full at capacity {capacity}")]
    TableFull { capacity: usize },

    /// Rejected input (empty key, empty corpus). No partial mutation occurred.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A symbol contains the pair-key separator, which would make pair keys
    /// ambiguous. Flagged instead of silently miscounted.
    #[error("Symbol {symbol:?} contains the pair separator")]
    AmbiguousPairBoundary { symbol: String },

    /// The store's frequency sum diverged from the original corpus count.
    /// Indicates internal corruption; training must halt.
    #[error("Frequency sum diverged: expected {expected}, found {actual}")]
    FrequencyDivergence { expected: u64, actual: u64 },

    /// The store's weighted byte total changed across a merge. Merges may
    /// only move symbol boundaries, never bytes.
    #[error("Byte total diverged: expected {expected}, found {actual}")]
    ByteDivergence { expected: u64, actual: u64 },

    /// Unknown fallback or vocabulary token
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error saving trained artifacts
    #[error("Save error: {0}")]
    Save(String),

    /// Error loading trained artifacts
    #[error("Load error: {0}")]
    Load(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for training operations.
pub type Result<T> = std::result::Result<T, TrainerError>;
