//! Pre-tokenization: the seams between raw text and the trainer.
//!
//! `pretokenize` (splitting) and `decompose` (initial symbols) are external
//! collaborators of the training core; this module supplies the default
//! implementations used by the CLI and tests.

pub mod decompose;
pub mod normalize;
pub mod split;

pub use decompose::{DecomposeMode, Decomposer, END_OF_WORD};
pub use normalize::Normalization;
pub use split::Splitter;
