//! The corpus collaborator: distinct words, frequencies, in-place
//! replacement.
//!
//! The training loop only ever talks to a corpus through the [`Corpus`]
//! trait, addressing words by stable integer ids. [`InMemoryCorpus`] is the
//! default implementation; any container honoring the contract works.

use crate::pair::Symbol;
use crate::tokenize::simple_tokenize;
use ahash::AHashMap;

/// Storage contract the training loop depends on.
///
/// Word ids are stable for the lifetime of a training run. Replacing a word
/// changes its symbol sequence but never its id.
pub trait Corpus {
    /// Number of distinct words.
    fn len(&self) -> usize;

    /// Whether the corpus holds no words.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current symbol sequence of the word with the given id.
    fn word(&self, id: usize) -> Option<&[Symbol]>;

    /// Occurrence count of the word with exactly this symbol sequence,
    /// or 0 if the corpus holds no such word.
    fn word_freq(&self, word: &[Symbol]) -> u64;

    /// Replace the symbol sequence of the word with the given id.
    /// Ids outside `0..len()` are ignored.
    fn replace_word(&mut self, id: usize, word: Vec<Symbol>);
}

/// In-memory corpus of distinct words with occurrence counts.
///
/// Words are stored in first-seen order, which fixes their ids. Symbols are
/// the codepoints of the original token until merges rewrite them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    words: Vec<Vec<Symbol>>,
    freqs: Vec<u64>,
    ids: AHashMap<Vec<Symbol>, usize>,
}

impl InMemoryCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from pre-tokenized words, counting duplicates.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut corpus = Self::new();
        for token in tokens {
            corpus.add_token(token);
        }
        corpus
    }

    /// Build a corpus from raw text using [`simple_tokenize`].
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(simple_tokenize(text))
    }

    /// Add one occurrence of a token, interning it if unseen.
    /// Returns the word id.
    pub fn add_token(&mut self, token: &str) -> usize {
        let symbols: Vec<Symbol> = token.chars().map(|c| c as Symbol).collect();
        if let Some(&id) = self.ids.get(&symbols) {
            self.freqs[id] += 1;
            return id;
        }
        let id = self.words.len();
        self.ids.insert(symbols.clone(), id);
        self.words.push(symbols);
        self.freqs.push(1);
        id
    }

    /// Iterate over `(id, symbols, frequency)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Symbol], u64)> {
        self.words
            .iter()
            .zip(self.freqs.iter())
            .enumerate()
            .map(|(id, (word, &freq))| (id, word.as_slice(), freq))
    }
}

impl Corpus for InMemoryCorpus {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn word(&self, id: usize) -> Option<&[Symbol]> {
        self.words.get(id).map(|w| w.as_slice())
    }

    fn word_freq(&self, word: &[Symbol]) -> u64 {
        self.ids.get(word).map(|&id| self.freqs[id]).unwrap_or(0)
    }

    fn replace_word(&mut self, id: usize, word: Vec<Symbol>) {
        let Some(slot) = self.words.get_mut(id) else {
            return;
        };
        let old = std::mem::replace(slot, word);
        self.ids.remove(&old);
        self.ids.insert(self.words[id].clone(), id);
    }
}
