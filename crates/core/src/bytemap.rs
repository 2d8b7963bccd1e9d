//! Reversible byte-to-symbol remapping.
//!
//! Large byte corpora need every byte value to map to a symbol that survives
//! text processing. Printable byte values keep their own codepoint; control
//! and whitespace bytes are remapped to synthetic codepoints from 256 upward.
//! The scheme follows GPT-2's byte-to-unicode table. It is a pure lookup
//! table with no connection to the training loop.

use crate::pair::Symbol;
use ahash::AHashMap;

/// Printable byte values that map to themselves. The ranges are exhaustive
/// by construction, not derived from a live printability test; 173 (soft
/// hyphen) is deliberately excluded.
fn is_printable(byte: u32) -> bool {
    matches!(byte, 33..=126 | 161..=172 | 174..=255)
}

/// Build the byte-to-symbol table.
///
/// Printable bytes map to their own codepoint; every other byte maps to
/// `256, 257, ...` in ascending byte order. The result is deterministic and
/// bijective over all 256 byte values.
pub fn byte_to_symbol() -> [Symbol; 256] {
    let mut table = [0 as Symbol; 256];
    let mut next = 256 as Symbol;

    for (byte, slot) in table.iter_mut().enumerate() {
        if is_printable(byte as u32) {
            *slot = byte as Symbol;
        } else {
            *slot = next;
            next += 1;
        }
    }

    table
}

/// Invert a byte-to-symbol table for decoding.
pub fn symbol_to_byte(table: &[Symbol; 256]) -> AHashMap<Symbol, u8> {
    let mut inverse = AHashMap::with_capacity(256);
    for (byte, &symbol) in table.iter().enumerate() {
        inverse.insert(symbol, byte as u8);
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_bytes_map_to_themselves() {
        let table = byte_to_symbol();
        assert_eq!(table[b'!' as usize], '!' as Symbol);
        assert_eq!(table[b'A' as usize], 'A' as Symbol);
        assert_eq!(table[b'~' as usize], '~' as Symbol);
        assert_eq!(table[161], 161);
        assert_eq!(table[255], 255);
    }

    #[test]
    fn test_unprintable_bytes_get_synthetic_symbols() {
        let table = byte_to_symbol();
        // Bytes 0..=32 are the first synthetic block.
        assert_eq!(table[0], 256);
        assert_eq!(table[32], 288);
        // DEL is the next unmapped byte after that block.
        assert_eq!(table[127], 289);
        // Soft hyphen is the last unmapped byte.
        assert_eq!(table[173], 323);
    }

    #[test]
    fn test_bijective() {
        let table = byte_to_symbol();
        let inverse = symbol_to_byte(&table);
        assert_eq!(inverse.len(), 256);
        for (byte, &symbol) in table.iter().enumerate() {
            assert_eq!(inverse.get(&symbol), Some(&(byte as u8)));
        }
    }
}
