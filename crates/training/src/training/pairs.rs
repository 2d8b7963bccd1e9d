//! Adjacent-pair enumeration over a word's symbol sequence.

use subword_core::{Pair, Symbol};

/// Write the adjacent pairs of `word` into `buf`, clearing it first.
///
/// A word of `n` symbols yields `n - 1` pairs in left-to-right order; words
/// with fewer than two symbols yield none. The buffer variant exists so a
/// caller walking a large corpus can enumerate once per word without
/// reallocating.
pub fn word_pairs_into(word: &[Symbol], buf: &mut Vec<Pair>) {
    buf.clear();
    buf.extend(word.windows(2).map(|w| Pair::new(w[0], w[1])));
}

/// Allocate and return the adjacent pairs of `word`.
pub fn word_pairs(word: &[Symbol]) -> Vec<Pair> {
    let mut buf = Vec::with_capacity(word.len().saturating_sub(1));
    word_pairs_into(word, &mut buf);
    buf
}

/// Set the word-end flag on the final pair of an enumeration.
///
/// The enumerator itself produces unmarked pairs; callers building table
/// keys mark the last pair in place.
pub fn mark_final_pair(pairs: &mut [Pair]) {
    if let Some(last) = pairs.last_mut() {
        *last = last.mark_word_end();
    }
}

/// Positions in `pairs` at which `target` occurs.
///
/// Matching is structural, word-end flag included. Matches are taken left to
/// right and never overlap: a hit at `i` consumes the pair at `i + 1`.
pub fn occurrences(target: Pair, pairs: &[Pair]) -> Vec<usize> {
    // a pair rarely occurs more than twice in one word
    let mut hits = Vec::with_capacity(2);
    let mut i = 0;
    while i < pairs.len() {
        if pairs[i] == target {
            hits.push(i);
            i += 2;
        } else {
            i += 1;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(word: &str) -> Vec<Symbol> {
        word.chars().map(|c| c as Symbol).collect()
    }

    #[test]
    fn test_word_pairs() {
        let expected = vec![
            Pair::new('H' as Symbol, 'e' as Symbol),
            Pair::new('e' as Symbol, 'l' as Symbol),
            Pair::new('l' as Symbol, 'l' as Symbol),
            Pair::new('l' as Symbol, 'o' as Symbol),
        ];
        assert_eq!(word_pairs(&symbols("Hello")), expected);
    }

    #[test]
    fn test_short_words_yield_no_pairs() {
        assert!(word_pairs(&symbols("e")).is_empty());
        assert!(word_pairs(&symbols("")).is_empty());
    }

    #[test]
    fn test_buffer_reuse_matches_allocating_variant() {
        let word = symbols("Hello");
        let mut buf = Vec::with_capacity(16);
        word_pairs_into(&word, &mut buf);
        assert_eq!(buf, word_pairs(&word));

        // A dirty buffer is cleared before reuse.
        word_pairs_into(&symbols("ab"), &mut buf);
        assert_eq!(buf, vec![Pair::new('a' as Symbol, 'b' as Symbol)]);
    }

    #[test]
    fn test_mark_final_pair() {
        let mut pairs = word_pairs(&symbols("abc"));
        mark_final_pair(&mut pairs);
        assert!(!pairs[0].is_word_end());
        assert_eq!(pairs[1], Pair::at_word_end('b' as Symbol, 'c' as Symbol));

        // No-op on an empty enumeration.
        let mut empty: Vec<Pair> = Vec::new();
        mark_final_pair(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        let mut pairs = word_pairs(&symbols("llll"));
        mark_final_pair(&mut pairs);

        // Pairs are (l,l) (l,l) (l,-l); the hit at 0 consumes index 1, and
        // index 2 is a different key because of the word-end flag.
        let hits = occurrences(Pair::new('l' as Symbol, 'l' as Symbol), &pairs);
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn test_occurrences_match_word_end_keys_structurally() {
        let mut pairs = word_pairs(&symbols("hehe"));
        mark_final_pair(&mut pairs);

        // Only the final (h,e) carries the flag.
        let mid = occurrences(Pair::new('h' as Symbol, 'e' as Symbol), &pairs);
        let end = occurrences(Pair::at_word_end('h' as Symbol, 'e' as Symbol), &pairs);
        assert_eq!(mid, vec![0]);
        assert_eq!(end, vec![2]);
    }

    #[test]
    fn test_disjoint_occurrences() {
        let pairs = word_pairs(&symbols("ababx"));
        let hits = occurrences(Pair::new('a' as Symbol, 'b' as Symbol), &pairs);
        assert_eq!(hits, vec![0, 2]);
    }
}
