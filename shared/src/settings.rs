// Formatting settings shared by the engine and the field binder
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::models::ScaleName;

pub const DEFAULT_GROUP_SEPARATOR: char = '\u{060C}'; // ،
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';
pub const DEFAULT_MAX_DIGITS: usize = 15;
pub const DEFAULT_OVERFLOW_MESSAGE: &str = "عدد بسیار بزرگ است!";
pub const DEFAULT_ZERO_WORD: &str = "صفر";
pub const DEFAULT_CURRENCY_UNIT: &str = "تومان";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    pub group_separator: char,
    pub decimal_separator: char,
    /// Longest integer part, in digits, that is spelled out.
    pub max_digits: usize,
    pub overflow_message: String,
    pub zero_word: String,
    pub currency_unit: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            group_separator: DEFAULT_GROUP_SEPARATOR,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            max_digits: DEFAULT_MAX_DIGITS,
            overflow_message: DEFAULT_OVERFLOW_MESSAGE.to_string(),
            zero_word: DEFAULT_ZERO_WORD.to_string(),
            currency_unit: DEFAULT_CURRENCY_UNIT.to_string(),
        }
    }
}

impl FormatSettings {
    /// `max_digits` clamped to what the scale-name table can spell.
    pub fn effective_max_digits(&self) -> usize {
        self.max_digits.min(ScaleName::max_digits())
    }

    /// Rejects settings that make grouped output ambiguous to parse back.
    pub fn validate(&self) -> Result<()> {
        if self.group_separator == self.decimal_separator {
            bail!(
                "group and decimal separators must differ (both '{}')",
                self.group_separator
            );
        }
        // Persian and Arabic-Indic digits are numeric too
        if self.group_separator.is_numeric() || self.decimal_separator.is_numeric() {
            bail!("separators cannot be digits");
        }
        if self.max_digits == 0 {
            bail!("max_digits must be greater than 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: FormatSettings = serde_json::from_str(r#"{ "max_digits": 9 }"#).unwrap();
        assert_eq!(settings.max_digits, 9);
        assert_eq!(settings.group_separator, '،');
        assert_eq!(settings.zero_word, "صفر");
    }

    #[test]
    fn test_effective_max_digits_is_clamped() {
        let settings = FormatSettings {
            max_digits: 40,
            ..FormatSettings::default()
        };
        assert_eq!(settings.effective_max_digits(), 15);
    }

    #[test]
    fn test_validate() {
        assert!(FormatSettings::default().validate().is_ok());

        let swapped = FormatSettings {
            group_separator: '.',
            decimal_separator: ',',
            ..FormatSettings::default()
        };
        assert!(swapped.validate().is_ok());

        let clashing = FormatSettings {
            group_separator: '،',
            decimal_separator: '،',
            ..FormatSettings::default()
        };
        let err = clashing.validate().unwrap_err();
        assert!(err.to_string().contains("must differ"));

        let digit = FormatSettings {
            group_separator: '۳',
            ..FormatSettings::default()
        };
        assert!(digit.validate().is_err());

        let no_digits = FormatSettings {
            max_digits: 0,
            ..FormatSettings::default()
        };
        assert!(no_digits.validate().is_err());
    }
}
