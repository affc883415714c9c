pub mod models;
pub mod settings;

pub use models::{Chunk, CleanedNumber, ScaleName};
pub use settings::FormatSettings;
