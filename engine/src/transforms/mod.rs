// Text transforms over numeric strings
pub mod currency;
pub mod digits;
pub mod grouping;
pub mod words;

use shared::FormatSettings;

use crate::error::{EngineError, Result};

pub const TRANSFORM_NAMES: [&str; 5] = ["persian", "latin", "separate", "raw", "words"];

// Common trait for all named transforms
pub trait Transform: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, input: &str) -> String;
}

pub fn transform_by_name(name: &str, settings: &FormatSettings) -> Result<Box<dyn Transform>> {
    let transform: Box<dyn Transform> = match name.trim().to_lowercase().as_str() {
        "persian" => Box::new(digits::PersianDigits),
        "latin" => Box::new(digits::LatinDigits),
        "separate" => Box::new(grouping::Separate::new(settings.clone())),
        "raw" => Box::new(grouping::RawNumber::new(settings.clone())),
        "words" => Box::new(words::Words::new(settings.clone())),
        _ => return Err(EngineError::UnknownTransform(name.to_string())),
    };
    Ok(transform)
}
