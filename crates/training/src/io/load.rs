//! Load functionality for learned encoders.

use super::format::SerializedEncoder;
use super::save::ENCODER_FILE;
use crate::training::learner::Encoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use subword_core::{Result, SubwordError};

/// Encoder loader - reads a learned encoder back from disk.
///
/// Malformed input aborts the load with an error; no partial encoder is
/// ever produced.
pub struct EncoderLoader;

impl EncoderLoader {
    /// Load an encoder from `encoder.json` inside the given directory.
    pub fn load(path: &Path) -> Result<Encoder> {
        let file_path = path.join(ENCODER_FILE);
        let file = File::open(&file_path).map_err(|e| {
            SubwordError::Load(format!(
                "Failed to open file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedEncoder = serde_json::from_reader(reader)
            .map_err(|e| SubwordError::Load(format!("Failed to deserialize encoder: {}", e)))?;

        Encoder::try_from(serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::EncoderSaver;
    use crate::training::Learner;
    use subword_core::InMemoryCorpus;

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = std::env::temp_dir().join("subword_test_load");
        std::fs::remove_dir_all(&temp_dir).ok();

        let mut corpus = InMemoryCorpus::from_text("hello world el melodies");
        let encoder = Learner::with_symbols(10).learn(&mut corpus);

        EncoderSaver::new(&encoder).save(&temp_dir).unwrap();
        let loaded = EncoderLoader::load(&temp_dir).unwrap();
        assert_eq!(loaded, encoder);

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let temp_dir = std::env::temp_dir().join("subword_test_load_malformed");
        std::fs::remove_dir_all(&temp_dir).ok();
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(temp_dir.join(ENCODER_FILE), "{ not json").unwrap();

        let err = EncoderLoader::load(&temp_dir).unwrap_err();
        assert!(matches!(err, SubwordError::Load(_)));

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = std::env::temp_dir().join("subword_test_load_missing");
        std::fs::remove_dir_all(&temp_dir).ok();

        assert!(EncoderLoader::load(&temp_dir).is_err());
    }
}
