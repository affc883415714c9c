// Amount and currency rendering for report tables
use shared::FormatSettings;

use super::digits::{to_latin_digits, to_persian_digits};
use super::grouping::{group_integer, is_group_separator};
use crate::error::{EngineError, Result};

/// Persian grouped digits; negative amounts are wrapped in parentheses.
pub fn format_amount(amount: i64, settings: &FormatSettings) -> String {
    let grouped = to_persian_digits(&group_integer(
        &amount.unsigned_abs().to_string(),
        settings.group_separator,
    ));
    if amount < 0 {
        format!("({})", grouped)
    } else {
        grouped
    }
}

/// `format_amount` followed by the currency unit. A missing amount renders as zero.
pub fn format_currency(amount: Option<i64>, settings: &FormatSettings) -> String {
    format!(
        "{} {}",
        format_amount(amount.unwrap_or(0), settings),
        settings.currency_unit
    )
}

/// Parses text produced by `format_amount` / `format_currency`, or plain
/// Latin/Persian digits with an optional leading `-`.
pub fn parse_amount(text: &str, settings: &FormatSettings) -> Result<i64> {
    let invalid = || EngineError::InvalidAmount(text.to_string());

    let latin = to_latin_digits(text.trim());
    let body = latin
        .strip_suffix(settings.currency_unit.as_str())
        .unwrap_or(&latin)
        .trim();

    let (negative, body) = if let Some(inner) = body.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        (true, inner.trim())
    } else if let Some(rest) = body.strip_prefix('-') {
        (true, rest.trim())
    } else {
        (false, body)
    };

    let digits: String = body.chars().filter(|c| !is_group_separator(*c, settings)).collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let magnitude: i64 = digits.parse().map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}
