// Caret mapping across a reformat of the field text
use engine::transforms::digits::digit_value;

// Separators and noise are dropped or reinserted by formatting; digits and the
// decimal separator are the only characters that survive a reformat in order.
fn is_significant(c: char, decimal_separator: char) -> bool {
    digit_value(c).is_some() || c == decimal_separator
}

/// Number of digits and decimal points before `caret`.
pub fn significant_before(text: &str, caret: usize, decimal_separator: char) -> usize {
    text.chars()
        .take(caret)
        .filter(|c| is_significant(*c, decimal_separator))
        .count()
}

/// Char position just after the `count`-th significant character of `text`.
/// Clamped to the end of the text.
pub fn caret_after_significant(text: &str, count: usize, decimal_separator: char) -> usize {
    if count == 0 {
        return 0;
    }
    let mut seen = 0;
    // positions are in chars, not bytes; Persian digits are two bytes each
    for (i, c) in text.chars().enumerate() {
        if is_significant(c, decimal_separator) {
            seen += 1;
            if seen == count {
                return i + 1;
            }
        }
    }
    // fewer significant characters than requested: park the caret at the end
    text.chars().count()
}

/// Moves a caret from `old` to the matching place in `new`, so it stays after
/// the same digit it followed before separators were inserted or removed.
pub fn remap_caret(old: &str, caret: usize, new: &str, decimal_separator: char) -> usize {
    let count = significant_before(old, caret, decimal_separator);
    caret_after_significant(new, count, decimal_separator)
}
