//! Symbol pairs, the unit of merge candidacy.
//!
//! A [`Pair`] names two adjacent symbols inside a word. The pair that closes
//! a word carries a word-end flag, and that flag is part of the key: the
//! frequency table and the inverted index count `(h, e)` mid-word and
//! `(h, e)` at the end of a word separately.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Integer identifier for a vocabulary unit.
///
/// Initial symbols are the raw codepoints of the input text. Symbols created
/// by merges are allocated from `max_symbol + 1` upward and may exceed the
/// valid `char` range.
pub type Symbol = u32;

/// An ordered pair of symbols.
///
/// Use [`Pair::new`] for a mid-word pair and [`Pair::at_word_end`] (or
/// [`Pair::mark_word_end`]) for the final pair of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    first: Symbol,
    second: Symbol,
    word_end: bool,
}

impl Pair {
    /// Create a mid-word pair.
    pub fn new(first: Symbol, second: Symbol) -> Self {
        Self {
            first,
            second,
            word_end: false,
        }
    }

    /// Create a pair flagged as the last pair of its word.
    pub fn at_word_end(first: Symbol, second: Symbol) -> Self {
        Self {
            first,
            second,
            word_end: true,
        }
    }

    /// Return this pair with the word-end flag set.
    pub fn mark_word_end(self) -> Self {
        Self {
            word_end: true,
            ..self
        }
    }

    /// The first symbol.
    #[inline]
    pub fn first(&self) -> Symbol {
        self.first
    }

    /// The second symbol, without the word-end flag.
    #[inline]
    pub fn second(&self) -> Symbol {
        self.second
    }

    /// Whether this pair closes its word.
    #[inline]
    pub fn is_word_end(&self) -> bool {
        self.word_end
    }

    /// The second symbol as a signed value, negated when the pair closes a
    /// word. This is both the wire representation and the comparison key.
    #[inline]
    fn signed_second(&self) -> i64 {
        if self.word_end {
            -(i64::from(self.second))
        } else {
            i64::from(self.second)
        }
    }
}

// Total order: by first symbol, then by the signed second key, so a word-end
// pair sorts before its mid-word counterpart. The flag itself is the final
// key so that symbol 0 at a word end still orders consistently with Eq.
impl Ord for Pair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.first
            .cmp(&other.first)
            .then_with(|| self.signed_second().cmp(&other.signed_second()))
            .then_with(|| self.word_end.cmp(&other.word_end))
    }
}

impl PartialOrd for Pair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.first, self.signed_second())
    }
}

/// Wire form of a [`Pair`]: two plain integers, with the word-end flag folded
/// into the sign of `second`.
///
/// A word-end pair whose second symbol is 0 loses its flag on the wire, since
/// 0 has no negation. That gap is inherent to the sign convention; text
/// corpora never place symbol 0 at a word end.
#[derive(Serialize, Deserialize)]
struct Transport {
    first: i64,
    second: i64,
}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Transport {
            first: i64::from(self.first),
            second: self.signed_second(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Pair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let t = Transport::deserialize(deserializer)?;
        let first = Symbol::try_from(t.first)
            .map_err(|_| D::Error::custom(format!("first symbol out of range: {}", t.first)))?;
        let word_end = t.second < 0;
        let second = Symbol::try_from(t.second.unsigned_abs())
            .map_err(|_| D::Error::custom(format!("second symbol out of range: {}", t.second)))?;
        Ok(Self {
            first,
            second,
            word_end,
        })
    }
}
