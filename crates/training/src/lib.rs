//! Subword-training - BPE merge-table learning
//!
//! This crate trains a byte-pair-encoding vocabulary from a word-frequency
//! corpus: it repeatedly finds the most frequent adjacent symbol pair and
//! collapses it into a fresh symbol, maintaining the pair-frequency table
//! and the pair-to-word inverted index incrementally so that no merge step
//! re-scans the whole corpus.
//!
//! # Example
//!
//! ```rust
//! use subword_core::InMemoryCorpus;
//! use subword_training::Learner;
//!
//! let mut corpus = InMemoryCorpus::from_text("hello world el melodies");
//! let encoder = Learner::with_symbols(10).learn(&mut corpus);
//!
//! // Only (e,l) clears the default frequency threshold.
//! assert_eq!(encoder.merges.len(), 1);
//! ```

pub use subword_core::{Result, SubwordError};

// Statistics and the merge loop
pub mod training;
pub use training::{Encoder, LearnConfig, Learner, Statistics};

// Persistence
pub mod io;
pub use io::{EncoderLoader, EncoderSaver, SerializedEncoder};
