// Persian number formatting engine
//
// The free functions below use the default `FormatSettings`; build a
// `NumberFormatter` to format with other settings.

pub mod config;
pub mod data;
pub mod error;
pub mod formatter;
pub mod transforms;

pub use error::{EngineError, Result};
pub use formatter::NumberFormatter;
pub use transforms::digits::{to_latin_digits, to_persian_digits};

use shared::FormatSettings;

pub fn separate(input: &str) -> String {
    transforms::grouping::separate(input, &FormatSettings::default())
}

pub fn get_raw_number(formatted: &str) -> String {
    transforms::grouping::get_raw_number(formatted, &FormatSettings::default())
}

pub fn to_words(input: &str) -> String {
    transforms::words::to_words(input, &FormatSettings::default())
}
