//! Training: pair-frequency accounting and the merge loop.

pub mod engine;
pub mod stats;

pub use engine::{EngineState, MergeEngine, TrainedModel, TrainingConfig};
pub use stats::{PairCandidate, PairStats};
