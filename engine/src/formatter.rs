use shared::{CleanedNumber, FormatSettings};

use crate::error::Result;
use crate::transforms::{currency, digits, grouping, words};

/// Entry point bundling the transforms with one set of [`FormatSettings`].
///
/// Construct once at startup and pass it by reference (or behind an `Arc`)
/// to whatever needs formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormatter {
    settings: FormatSettings,
}

impl NumberFormatter {
    pub fn new(settings: FormatSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FormatSettings {
        &self.settings
    }

    pub fn to_persian_digits(&self, input: &str) -> String {
        digits::to_persian_digits(input)
    }

    pub fn to_latin_digits(&self, input: &str) -> String {
        digits::to_latin_digits(input)
    }

    pub fn clean(&self, input: &str) -> CleanedNumber {
        grouping::clean_number(input, &self.settings)
    }

    pub fn separate(&self, input: &str) -> String {
        grouping::separate(input, &self.settings)
    }

    pub fn get_raw_number(&self, formatted: &str) -> String {
        grouping::get_raw_number(formatted, &self.settings)
    }

    pub fn to_words(&self, input: &str) -> String {
        words::to_words(input, &self.settings)
    }

    pub fn format_amount(&self, amount: i64) -> String {
        currency::format_amount(amount, &self.settings)
    }

    pub fn format_currency(&self, amount: Option<i64>) -> String {
        currency::format_currency(amount, &self.settings)
    }

    pub fn parse_amount(&self, text: &str) -> Result<i64> {
        currency::parse_amount(text, &self.settings)
    }
}
