//! Persistence of learned encoders.

pub mod format;
pub mod load;
pub mod save;

pub use format::{ReplacementRecord, SerializedEncoder};
pub use load::EncoderLoader;
pub use save::EncoderSaver;
