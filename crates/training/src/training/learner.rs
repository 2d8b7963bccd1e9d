//! The merge loop: select the best pair, rewrite affected words, repair the
//! statistics incrementally.
//!
//! Each iteration touches only the words listed under the selected pair in
//! the inverted index; the rest of the corpus is never re-scanned. The
//! repair step keeps the frequency table and index exactly consistent with
//! the corpus's post-merge symbol sequences, which is what makes the next
//! selection trustworthy.

use super::pairs::{mark_final_pair, occurrences, word_pairs_into};
use super::stats::Statistics;
use ahash::AHashMap;
use subword_core::{Corpus, Pair, Symbol};

/// Configuration for a training run.
#[derive(Debug, Clone)]
pub struct LearnConfig {
    /// Maximum number of merges to learn.
    pub symbols: usize,
    /// Stop once the best pair's frequency falls below this.
    pub min_frequency: i64,
    /// Build the initial statistics in parallel.
    pub parallel: bool,
}

impl Default for LearnConfig {
    fn default() -> Self {
        Self {
            symbols: 30_000,
            min_frequency: 2,
            parallel: true,
        }
    }
}

/// The learned artifact: an ordered merge list, the pair-to-symbol
/// replacement map, and the final symbol high-water mark.
///
/// The merge order is semantically significant for any later application of
/// the table. Built once at the end of training, immutable thereafter. The
/// caller keeps ownership of the corpus, whose words now carry the merged
/// symbols.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encoder {
    /// Merged pairs in learning order.
    pub merges: Vec<Pair>,
    /// The synthetic symbol each merged pair was replaced by.
    pub replacements: AHashMap<Pair, Symbol>,
    /// Final symbol high-water mark.
    pub max_symbol: Symbol,
}

/// BPE learner.
///
/// Trains an [`Encoder`] by iteratively collapsing the most frequent
/// adjacent pair into a fresh symbol.
#[derive(Debug, Clone, Default)]
pub struct Learner {
    config: LearnConfig,
}

/// A word rewritten by one merge step, with everything the repair step
/// needs: the pre-replacement sequence and the word's frequency, both
/// captured before the corpus was mutated.
struct ReplacedWord {
    id: usize,
    weight: i64,
    original: Vec<Symbol>,
    replacement: Vec<Symbol>,
}

impl Learner {
    /// Create a learner with the given configuration.
    pub fn new(config: LearnConfig) -> Self {
        Self { config }
    }

    /// Create a learner that runs at most `symbols` merges, with default
    /// frequency threshold.
    pub fn with_symbols(symbols: usize) -> Self {
        Self::new(LearnConfig {
            symbols,
            ..Default::default()
        })
    }

    /// Learn an encoder from the corpus, mutating its words in place.
    ///
    /// Termination is normal, not an error, in every case: the merge budget
    /// is exhausted, the best frequency falls below the threshold, or the
    /// table empties. Degenerate corpora (empty, or only single-symbol
    /// words) yield an empty merge list.
    pub fn learn<C: Corpus + Sync + ?Sized>(&self, corpus: &mut C) -> Encoder {
        self.learn_with_stats(corpus).0
    }

    /// [`Learner::learn`], also returning the final statistics.
    ///
    /// The returned statistics are pruned and exactly consistent with the
    /// mutated corpus; callers can cross-check them against a fresh
    /// [`Statistics::from_corpus`] scan.
    pub fn learn_with_stats<C: Corpus + Sync + ?Sized>(
        &self,
        corpus: &mut C,
    ) -> (Encoder, Statistics) {
        let mut stats = if self.config.parallel {
            Statistics::from_corpus_parallel(corpus)
        } else {
            Statistics::from_corpus(corpus)
        };

        let mut merges = Vec::new();
        let mut replacements = AHashMap::new();

        for _ in 0..self.config.symbols {
            // An empty table terminates explicitly rather than leaning on
            // the frequency threshold.
            let Some((best, freq)) = stats.best_pair() else {
                break;
            };
            if freq < self.config.min_frequency {
                break;
            }

            let fresh = stats.max_symbol + 1;
            let touched = replace_pair(corpus, &stats, best, fresh);
            repair_stats(&mut stats, &touched);

            // The merged pair cannot recur: its symbols were consumed.
            stats.drop_pair(best);
            stats.max_symbol = fresh;
            replacements.insert(best, fresh);
            merges.push(best);

            stats.prune();
        }

        (
            Encoder {
                merges,
                replacements,
                max_symbol: stats.max_symbol,
            },
            stats,
        )
    }
}

/// Rewrite every word containing `target`, collapsing each occurrence to
/// `fresh`, and return the touched words with their pre-replacement state.
///
/// Occurrences are located on the word-end-marked pair enumeration and
/// matched structurally, so a mid-word key never collapses a word-final
/// occurrence and vice versa. The corpus is mutated here, before any
/// statistics update is computed.
fn replace_pair<C: Corpus + ?Sized>(
    corpus: &mut C,
    stats: &Statistics,
    target: Pair,
    fresh: Symbol,
) -> Vec<ReplacedWord> {
    let Some(entries) = stats.index.get(&target) else {
        return Vec::new();
    };
    let ids: Vec<usize> = entries
        .iter()
        .filter(|&(_, &count)| count >= 1)
        .map(|(&id, _)| id)
        .collect();

    let mut touched = Vec::with_capacity(ids.len());
    let mut buf = Vec::new();
    for id in ids {
        let Some(original) = corpus.word(id).map(<[Symbol]>::to_vec) else {
            continue;
        };
        let weight = corpus.word_freq(&original) as i64;

        word_pairs_into(&original, &mut buf);
        mark_final_pair(&mut buf);
        let hits = occurrences(target, &buf);
        if hits.is_empty() {
            continue;
        }

        let replacement = collapse(&original, &hits, fresh);
        corpus.replace_word(id, replacement.clone());
        touched.push(ReplacedWord {
            id,
            weight,
            original,
            replacement,
        });
    }
    touched
}

/// Collapse the matched positions of a word into the fresh symbol.
/// `hits` are non-overlapping pair positions in ascending order.
fn collapse(word: &[Symbol], hits: &[usize], fresh: Symbol) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(word.len() - hits.len());
    let mut pending = hits.iter().copied().peekable();
    let mut i = 0;
    while i < word.len() {
        if pending.peek() == Some(&i) {
            pending.next();
            out.push(fresh);
            i += 2;
        } else {
            out.push(word[i]);
            i += 1;
        }
    }
    out
}

/// Repair the statistics for the words one merge step rewrote.
///
/// Per word: every marked pair of the pre-replacement sequence is erased and
/// every marked pair of the post-replacement sequence recorded, at the
/// word's weight. For an isolated occurrence this is exactly the prev/next
/// neighbor update; diffing the whole word also stays exact when
/// occurrences touch each other or sit at the word boundary, where the
/// word-end key of the neighboring pair changes.
fn repair_stats(stats: &mut Statistics, touched: &[ReplacedWord]) {
    let mut buf = Vec::new();
    for word in touched {
        word_pairs_into(&word.original, &mut buf);
        mark_final_pair(&mut buf);
        for &p in buf.iter() {
            stats.erase(p, word.id, word.weight);
        }

        word_pairs_into(&word.replacement, &mut buf);
        mark_final_pair(&mut buf);
        for &p in buf.iter() {
            stats.record(p, word.id, word.weight);
        }
    }
}
