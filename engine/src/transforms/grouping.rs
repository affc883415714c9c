// Thousands grouping and its inverse
use shared::{CleanedNumber, FormatSettings};

use super::digits::{to_latin_digits, to_persian_digits};
use super::Transform;

/// Separator glyphs recognised on input regardless of the configured one.
pub const GROUP_SEPARATOR_VARIANTS: [char; 3] = [',', '\u{066C}', '\u{060C}'];

pub(crate) fn is_group_separator(c: char, settings: &FormatSettings) -> bool {
    c != settings.decimal_separator
        && (c == settings.group_separator || GROUP_SEPARATOR_VARIANTS.contains(&c))
}

/// Latin digits and the first decimal point of `input`.
///
/// Only the configured decimal separator starts a fraction. A literal `.` is
/// noise unless it is that separator, so `1.234,5` cleans to `1234.5` when the
/// separators are swapped.
pub fn clean_number(input: &str, settings: &FormatSettings) -> CleanedNumber {
    let latin: String = to_latin_digits(input)
        .chars()
        .filter_map(|c| {
            if c == settings.decimal_separator {
                Some('.')
            } else if c == '.' || is_group_separator(c, settings) {
                None
            } else {
                Some(c)
            }
        })
        .collect();
    CleanedNumber::retain(&latin, '.')
}

/// Inserts `separator` every three digits from the right of an ASCII digit run.
pub fn group_integer(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / 3 * separator.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

pub fn separate(input: &str, settings: &FormatSettings) -> String {
    let cleaned = clean_number(input, settings);
    if cleaned.is_empty() {
        return String::new();
    }

    let mut out = group_integer(cleaned.integer(), settings.group_separator);
    if let Some(fraction) = cleaned.fraction() {
        out.push(settings.decimal_separator);
        out.push_str(fraction);
    }
    to_persian_digits(&out)
}

pub fn get_raw_number(formatted: &str, settings: &FormatSettings) -> String {
    let stripped: String = formatted
        .chars()
        .filter(|c| !is_group_separator(*c, settings))
        .map(|c| if c == settings.decimal_separator { '.' } else { c })
        .collect();
    to_latin_digits(&stripped)
}

pub struct Separate {
    settings: FormatSettings,
}

impl Separate {
    pub fn new(settings: FormatSettings) -> Self {
        Self { settings }
    }
}

impl Transform for Separate {
    fn name(&self) -> &str {
        "separate"
    }

    fn apply(&self, input: &str) -> String {
        separate(input, &self.settings)
    }
}

pub struct RawNumber {
    settings: FormatSettings,
}

impl RawNumber {
    pub fn new(settings: FormatSettings) -> Self {
        Self { settings }
    }
}

impl Transform for RawNumber {
    fn name(&self) -> &str {
        "raw"
    }

    fn apply(&self, input: &str) -> String {
        get_raw_number(input, &self.settings)
    }
}
