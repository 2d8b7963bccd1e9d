//! Save functionality for learned encoders.

use super::format::SerializedEncoder;
use crate::training::learner::Encoder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use subword_core::{Result, SubwordError};

/// Name of the serialized encoder file inside the model directory.
pub const ENCODER_FILE: &str = "encoder.json";

/// Encoder saver - writes a learned encoder to disk.
pub struct EncoderSaver<'a> {
    encoder: &'a Encoder,
}

impl<'a> EncoderSaver<'a> {
    /// Create a saver for the given encoder.
    pub fn new(encoder: &'a Encoder) -> Self {
        Self { encoder }
    }

    /// Save the encoder as `encoder.json` inside the given directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            SubwordError::Save(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;

        let file_path = path.join(ENCODER_FILE);
        let file = File::create(&file_path).map_err(|e| {
            SubwordError::Save(format!(
                "Failed to create file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &SerializedEncoder::from(self.encoder))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use subword_core::{Pair, Symbol};

    #[test]
    fn test_save_creates_encoder_file() {
        let temp_dir = std::env::temp_dir().join("subword_test_save");
        std::fs::remove_dir_all(&temp_dir).ok();

        let el = Pair::new('e' as Symbol, 'l' as Symbol);
        let mut replacements = AHashMap::new();
        replacements.insert(el, 120);
        let encoder = Encoder {
            merges: vec![el],
            replacements,
            max_symbol: 120,
        };

        EncoderSaver::new(&encoder).save(&temp_dir).unwrap();
        assert!(temp_dir.join(ENCODER_FILE).exists());

        std::fs::remove_dir_all(temp_dir).ok();
    }
}
