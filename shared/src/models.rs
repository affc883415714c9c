use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric string reduced to ASCII digits and at most one decimal point.
///
/// `"12."` keeps its trailing point so a value that is still being typed
/// survives a clean/format cycle. A value without any digit is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedNumber {
    integer: String,
    fraction: Option<String>,
}

impl CleanedNumber {
    /// Keeps ASCII digits and the first `decimal_point`; everything else is dropped.
    /// Non-ASCII digits must already have been converted by the caller.
    pub fn retain(text: &str, decimal_point: char) -> Self {
        let mut integer = String::new();
        let mut fraction: Option<String> = None;

        for c in text.chars() {
            if c.is_ascii_digit() {
                match fraction.as_mut() {
                    Some(frac) => frac.push(c),
                    None => integer.push(c),
                }
            } else if c == decimal_point && fraction.is_none() {
                fraction = Some(String::new());
            }
        }

        let cleaned = Self { integer, fraction };
        if cleaned.digit_count() == 0 {
            return Self::default();
        }
        cleaned
    }

    pub fn integer(&self) -> &str {
        &self.integer
    }

    pub fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.digit_count() == 0
    }

    pub fn digit_count(&self) -> usize {
        self.integer.len() + self.fraction.as_ref().map_or(0, String::len)
    }

    /// Renders with `.` as the decimal point.
    pub fn as_latin(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CleanedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.integer)?;
        if let Some(frac) = &self.fraction {
            write!(f, ".{}", frac)?;
        }
        Ok(())
    }
}

/// A 0..=999 group of a number's decimal representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub hundreds: u8,
    pub tens: u8,
    pub units: u8,
}

impl Chunk {
    /// Builds a chunk from one to three ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut padded = [0u8; 3];
        let offset = 3 - digits.len();
        for (i, b) in digits.bytes().enumerate() {
            padded[offset + i] = b - b'0';
        }
        Some(Self {
            hundreds: padded[0],
            tens: padded[1],
            units: padded[2],
        })
    }

    pub fn value(&self) -> u16 {
        self.hundreds as u16 * 100 + self.remainder() as u16
    }

    /// The two-digit part below the hundreds.
    pub fn remainder(&self) -> u8 {
        self.tens * 10 + self.units
    }

    pub fn is_zero(&self) -> bool {
        self.value() == 0
    }
}

/// Magnitude of a chunk, counted from the least significant end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleName {
    None,
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl ScaleName {
    pub const ALL: [ScaleName; 5] = [
        ScaleName::None,
        ScaleName::Thousand,
        ScaleName::Million,
        ScaleName::Billion,
        ScaleName::Trillion,
    ];

    /// Position 0 is the least significant chunk.
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Largest digit count the scale table can name.
    pub const fn max_digits() -> usize {
        Self::ALL.len() * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retain_keeps_first_point_only() {
        let cleaned = CleanedNumber::retain("1,234.5.6", '.');
        assert_eq!(cleaned.integer(), "1234");
        assert_eq!(cleaned.fraction(), Some("56"));
        assert_eq!(cleaned.to_string(), "1234.56");
    }

    #[test]
    fn test_retain_without_digits_is_empty() {
        assert!(CleanedNumber::retain("abc", '.').is_empty());
        assert!(CleanedNumber::retain(".", '.').is_empty());
        assert_eq!(CleanedNumber::retain("  ", '.').to_string(), "");
    }

    #[test]
    fn test_retain_keeps_trailing_point() {
        assert_eq!(CleanedNumber::retain("12.", '.').to_string(), "12.");
    }

    #[test]
    fn test_chunk_from_digits() {
        let chunk = Chunk::from_digits("125").unwrap();
        assert_eq!((chunk.hundreds, chunk.tens, chunk.units), (1, 2, 5));
        assert_eq!(chunk.value(), 125);
        assert_eq!(Chunk::from_digits("7").unwrap().value(), 7);
        assert!(Chunk::from_digits("000").unwrap().is_zero());
        assert!(Chunk::from_digits("1234").is_none());
        assert!(Chunk::from_digits("").is_none());
        assert!(Chunk::from_digits("1a").is_none());
    }

    #[test]
    fn test_scale_positions() {
        assert_eq!(ScaleName::from_position(0), Some(ScaleName::None));
        assert_eq!(ScaleName::from_position(4), Some(ScaleName::Trillion));
        assert_eq!(ScaleName::from_position(5), None);
        assert_eq!(ScaleName::max_digits(), 15);
    }
}
