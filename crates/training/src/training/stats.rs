//! Pair statistics: the frequency table and the inverted index.
//!
//! [`Statistics`] is the mutable training state. After every completed merge
//! iteration the table must agree exactly with the corpus's current symbol
//! sequences: `freqs[p]` is the weighted count of adjacent occurrences of
//! `p` across all words, and `index[p]` lists exactly the word ids
//! containing `p` with their per-word occurrence counts. Selection relies on
//! that exactness, so repairs are never approximate.

use super::pairs::{mark_final_pair, word_pairs_into};
use ahash::AHashMap;
use rayon::prelude::*;
use subword_core::{Corpus, Pair, Symbol};

/// Frequency table, inverted index, and the symbol high-water mark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    /// Pair -> corpus-wide frequency, weighted by word frequency.
    pub freqs: AHashMap<Pair, i64>,
    /// Pair -> (word id -> occurrence count within that word).
    pub index: AHashMap<Pair, AHashMap<usize, i64>>,
    /// Highest symbol id seen in any pair position. Monotonically
    /// non-decreasing; fresh symbols are allocated above it.
    pub max_symbol: Symbol,
}

impl Statistics {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the whole corpus once and build the initial statistics.
    ///
    /// The final pair of each word is keyed with the word-end flag while the
    /// table is built. Words with fewer than two symbols contribute nothing.
    pub fn from_corpus<C: Corpus + ?Sized>(corpus: &C) -> Self {
        let mut stats = Self::new();
        let mut buf = Vec::new();
        for id in 0..corpus.len() {
            let Some(word) = corpus.word(id) else {
                continue;
            };
            let weight = corpus.word_freq(word) as i64;
            stats.observe(id, word, weight, &mut buf);
        }
        stats
    }

    /// Parallel variant of [`Statistics::from_corpus`].
    ///
    /// Per-word statistics are folded per rayon worker and reduced by
    /// addition, so the result is identical to the sequential build.
    pub fn from_corpus_parallel<C: Corpus + Sync + ?Sized>(corpus: &C) -> Self {
        (0..corpus.len())
            .into_par_iter()
            .fold(
                || (Self::new(), Vec::new()),
                |(mut stats, mut buf), id| {
                    if let Some(word) = corpus.word(id) {
                        let weight = corpus.word_freq(word) as i64;
                        stats.observe(id, word, weight, &mut buf);
                    }
                    (stats, buf)
                },
            )
            .map(|(stats, _)| stats)
            .reduce(Self::new, Self::merge)
    }

    /// Fold one word into the tables.
    fn observe(&mut self, id: usize, word: &[Symbol], weight: i64, buf: &mut Vec<Pair>) {
        word_pairs_into(word, buf);
        if buf.is_empty() {
            return;
        }
        // The high-water mark tracks raw pair positions, before marking.
        for p in buf.iter() {
            self.max_symbol = self.max_symbol.max(p.first()).max(p.second());
        }
        mark_final_pair(buf);
        for &p in buf.iter() {
            self.record(p, id, weight);
        }
    }

    /// Combine two partial statistics by addition.
    fn merge(mut self, other: Self) -> Self {
        for (pair, freq) in other.freqs {
            *self.freqs.entry(pair).or_insert(0) += freq;
        }
        for (pair, counts) in other.index {
            let entry = self.index.entry(pair).or_default();
            for (id, count) in counts {
                *entry.entry(id).or_insert(0) += count;
            }
        }
        self.max_symbol = self.max_symbol.max(other.max_symbol);
        self
    }

    /// Count one occurrence of `pair` in the word `word_id`, weighted by the
    /// word's frequency.
    pub fn record(&mut self, pair: Pair, word_id: usize, weight: i64) {
        *self.freqs.entry(pair).or_insert(0) += weight;
        *self.index.entry(pair).or_default().entry(word_id).or_insert(0) += 1;
    }

    /// Remove one occurrence of `pair` from the word `word_id`.
    ///
    /// The word's index entry disappears as soon as its count reaches zero;
    /// the frequency entry may linger at zero until [`Statistics::prune`].
    pub fn erase(&mut self, pair: Pair, word_id: usize, weight: i64) {
        *self.freqs.entry(pair).or_insert(0) -= weight;
        let counts = self.index.entry(pair).or_default();
        let count = counts.entry(word_id).or_insert(0);
        *count -= 1;
        if *count <= 0 {
            counts.remove(&word_id);
        }
    }

    /// Drop a pair from both tables entirely. Used for a pair whose symbols
    /// have just been consumed by a merge.
    pub fn drop_pair(&mut self, pair: Pair) {
        self.freqs.remove(&pair);
        self.index.remove(&pair);
    }

    /// The current frequency of a pair, 0 if absent.
    pub fn freq(&self, pair: Pair) -> i64 {
        self.freqs.get(&pair).copied().unwrap_or(0)
    }

    /// The pair with the highest frequency, or `None` on an empty table.
    ///
    /// The map has no inherent iteration order, so equal frequencies are
    /// broken by the total order on pairs: lower first symbol wins, then the
    /// lower signed second key. This keeps selection reproducible across
    /// runs.
    pub fn best_pair(&self) -> Option<(Pair, i64)> {
        let mut best: Option<(Pair, i64)> = None;
        for (&pair, &freq) in &self.freqs {
            best = match best {
                None => Some((pair, freq)),
                Some((bp, bf)) if freq > bf || (freq == bf && pair < bp) => Some((pair, freq)),
                keep => keep,
            };
        }
        best
    }

    /// Garbage-collect decayed entries: frequencies at or below zero,
    /// per-word counts at or below zero, and empty index sub-maps. Stale
    /// entries must never reach [`Statistics::best_pair`].
    pub fn prune(&mut self) {
        self.freqs.retain(|_, freq| *freq > 0);
        for counts in self.index.values_mut() {
            counts.retain(|_, count| *count > 0);
        }
        self.index.retain(|_, counts| !counts.is_empty());
    }
}
