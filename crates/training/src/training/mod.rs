//! The statistics engine and the merge loop.

pub mod learner;
pub mod pairs;
pub mod stats;

pub use learner::{Encoder, LearnConfig, Learner};
pub use pairs::{mark_final_pair, occurrences, word_pairs, word_pairs_into};
pub use stats::Statistics;
