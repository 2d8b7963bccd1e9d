//! On-disk format of a learned encoder.

use crate::training::learner::Encoder;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use subword_core::{Pair, SubwordError, Symbol};

/// One merge's replacement: the pair and the symbol it collapsed into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementRecord {
    /// The merged pair.
    pub pair: Pair,
    /// The synthetic symbol that replaced it.
    pub symbol: Symbol,
}

/// Complete serialized encoder.
///
/// `merges` preserves learning order; `replacements` is emitted in the same
/// order so the file is byte-stable across runs. Pairs serialize as
/// `{first, second}` with the word-end flag folded into the sign of
/// `second`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedEncoder {
    /// Format version.
    pub version: String,
    /// Merged pairs in learning order.
    pub merges: Vec<Pair>,
    /// Replacement symbol per merge, in the same order.
    pub replacements: Vec<ReplacementRecord>,
    /// Final symbol high-water mark.
    pub max_symbol: Symbol,
}

impl From<&Encoder> for SerializedEncoder {
    fn from(encoder: &Encoder) -> Self {
        let replacements = encoder
            .merges
            .iter()
            .filter_map(|pair| {
                encoder.replacements.get(pair).map(|&symbol| ReplacementRecord {
                    pair: *pair,
                    symbol,
                })
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            merges: encoder.merges.clone(),
            replacements,
            max_symbol: encoder.max_symbol,
        }
    }
}

impl TryFrom<SerializedEncoder> for Encoder {
    type Error = SubwordError;

    fn try_from(data: SerializedEncoder) -> Result<Self, Self::Error> {
        let mut replacements = AHashMap::with_capacity(data.replacements.len());
        for record in data.replacements {
            replacements.insert(record.pair, record.symbol);
        }

        for pair in &data.merges {
            if !replacements.contains_key(pair) {
                return Err(SubwordError::Load(format!(
                    "merge {} has no replacement symbol",
                    pair
                )));
            }
        }

        Ok(Encoder {
            merges: data.merges,
            replacements,
            max_symbol: data.max_symbol,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subword_core::Symbol;

    fn sample_encoder() -> Encoder {
        let el = Pair::new('e' as Symbol, 'l' as Symbol);
        let he = Pair::at_word_end('h' as Symbol, 'e' as Symbol);
        let mut replacements = AHashMap::new();
        replacements.insert(el, 120);
        replacements.insert(he, 121);
        Encoder {
            merges: vec![el, he],
            replacements,
            max_symbol: 121,
        }
    }

    #[test]
    fn test_serialized_form_roundtrip() {
        let encoder = sample_encoder();
        let serialized = SerializedEncoder::from(&encoder);
        assert_eq!(serialized.replacements.len(), 2);
        assert_eq!(serialized.replacements[0].symbol, 120);

        let json = serde_json::to_string(&serialized).unwrap();
        let parsed: SerializedEncoder = serde_json::from_str(&json).unwrap();
        let back = Encoder::try_from(parsed).unwrap();
        assert_eq!(back, encoder);
    }

    #[test]
    fn test_missing_replacement_is_rejected() {
        let mut serialized = SerializedEncoder::from(&sample_encoder());
        serialized.replacements.pop();
        assert!(Encoder::try_from(serialized).is_err());
    }
}
