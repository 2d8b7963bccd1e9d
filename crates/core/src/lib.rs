//! Subword-core - Data model for BPE merge-table learning
//!
//! This crate provides the leaf types shared by the training engine: symbol
//! pairs with the word-end keying convention, the corpus storage contract,
//! the default whitespace tokenizer, and the byte-to-symbol remap table.
//!
//! # Example
//!
//! ```rust
//! use subword_core::{Corpus, InMemoryCorpus};
//!
//! let corpus = InMemoryCorpus::from_text("hello world hello");
//! assert_eq!(corpus.len(), 2);
//!
//! let hello: Vec<u32> = "hello".chars().map(|c| c as u32).collect();
//! assert_eq!(corpus.word_freq(&hello), 2);
//! ```

pub mod error;
pub use error::{Result, SubwordError};

pub mod pair;
pub use pair::{Pair, Symbol};

pub mod corpus;
pub use corpus::{Corpus, InMemoryCorpus};

pub mod tokenize;
pub use tokenize::simple_tokenize;

pub mod bytemap;
pub use bytemap::{byte_to_symbol, symbol_to_byte};
