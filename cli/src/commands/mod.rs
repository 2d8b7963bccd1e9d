//! CLI subcommand implementations.

pub mod inspect;
pub mod train;

pub use inspect::InspectCommand;
pub use train::TrainCommand;
