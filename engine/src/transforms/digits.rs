// Digit conversion between ASCII and Persian / Arabic-Indic glyphs
use super::Transform;

pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
pub const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Numeric value of an ASCII, Persian (U+06F0..U+06F9) or Arabic-Indic
/// (U+0660..U+0669) digit.
pub fn digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        '\u{06F0}'..='\u{06F9}' => Some((c as u32 - 0x06F0) as u8),
        '\u{0660}'..='\u{0669}' => Some((c as u32 - 0x0660) as u8),
        _ => None,
    }
}

pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                PERSIAN_DIGITS[(c as u8 - b'0') as usize]
            } else {
                c
            }
        })
        .collect()
}

pub fn to_latin_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match digit_value(c) {
            Some(d) => char::from(b'0' + d),
            None => c,
        })
        .collect()
}

pub struct PersianDigits;

impl Transform for PersianDigits {
    fn name(&self) -> &str {
        "persian"
    }

    fn apply(&self, input: &str) -> String {
        to_persian_digits(input)
    }
}

pub struct LatinDigits;

impl Transform for LatinDigits {
    fn name(&self) -> &str {
        "latin"
    }

    fn apply(&self, input: &str) -> String {
        to_latin_digits(input)
    }
}
