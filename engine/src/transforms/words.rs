// Persian number spelling
use shared::{Chunk, FormatSettings, ScaleName};

use super::grouping::clean_number;
use super::Transform;

const UNITS: [&str; 10] = ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"];
const TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];
const TENS: [&str; 10] = ["", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود"];
const HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

/// "and"
pub const JOINER: &str = " و ";

pub fn scale_word(scale: ScaleName) -> &'static str {
    match scale {
        ScaleName::None => "",
        ScaleName::Thousand => "هزار",
        ScaleName::Million => "میلیون",
        ScaleName::Billion => "میلیارد",
        ScaleName::Trillion => "تریلیون",
    }
}

/// Spells a single 0..=999 chunk. Zero yields an empty segment.
pub fn chunk_to_words(chunk: Chunk) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);

    if chunk.hundreds > 0 {
        parts.push(HUNDREDS[chunk.hundreds as usize]);
    }

    let remainder = chunk.remainder();
    if (10..20).contains(&remainder) {
        parts.push(TEENS[(remainder - 10) as usize]);
    } else {
        if chunk.tens > 0 {
            parts.push(TENS[chunk.tens as usize]);
        }
        if chunk.units > 0 {
            parts.push(UNITS[chunk.units as usize]);
        }
    }

    parts.join(JOINER)
}

/// Splits an ASCII digit run into chunks, most significant first. The leading
/// chunk holds one to three digits.
pub fn split_chunks(digits: &str) -> Vec<Chunk> {
    let len = digits.len();
    let first = match len % 3 {
        0 => 3.min(len),
        r => r,
    };

    let mut chunks = Vec::with_capacity(len.div_ceil(3));
    let mut start = 0;
    let mut end = first;
    while start < len {
        if let Some(chunk) = Chunk::from_digits(&digits[start..end]) {
            chunks.push(chunk);
        }
        start = end;
        end = (end + 3).min(len);
    }
    chunks
}

pub fn to_words(input: &str, settings: &FormatSettings) -> String {
    let cleaned = clean_number(input, settings);
    // only the integer part is spelled; leading zeros still count towards the limit
    let digits = cleaned.integer();

    if digits.is_empty() {
        return String::new();
    }
    if digits == "0" {
        return settings.zero_word.clone();
    }
    if digits.len() > settings.effective_max_digits() {
        return settings.overflow_message.clone();
    }

    // all-zero chunks are skipped, so "000" spells as nothing

    let chunks = split_chunks(digits);
    let count = chunks.len();
    let phrases: Vec<String> = chunks
        .into_iter()
        .enumerate()
        .filter(|(_, chunk)| !chunk.is_zero())
        .map(|(i, chunk)| {
            let mut phrase = chunk_to_words(chunk);
            let scale = ScaleName::from_position(count - 1 - i).map_or("", scale_word);
            if !scale.is_empty() {
                phrase.push(' ');
                phrase.push_str(scale);
            }
            phrase
        })
        .collect();

    phrases.join(JOINER)
}

pub struct Words {
    settings: FormatSettings,
}

impl Words {
    pub fn new(settings: FormatSettings) -> Self {
        Self { settings }
    }
}

impl Transform for Words {
    fn name(&self) -> &str {
        "words"
    }

    fn apply(&self, input: &str) -> String {
        to_words(input, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(input: &str) -> String {
        to_words(input, &FormatSettings::default())
    }

    #[test]
    fn test_zero_and_empty() {
        assert_eq!(words("0"), "صفر");
        assert_eq!(words("000"), "");
        assert_eq!(words("0.5"), "صفر");
        assert_eq!(words(""), "");
        assert_eq!(words("abc"), "");
    }

    #[test]
    fn test_single_chunk() {
        assert_eq!(words("5"), "پنج");
        assert_eq!(words("10"), "ده");
        assert_eq!(words("17"), "هفده");
        assert_eq!(words("20"), "بیست");
        assert_eq!(words("21"), "بیست و یک");
        assert_eq!(words("100"), "صد");
        assert_eq!(words("105"), "صد و پنج");
        assert_eq!(words("112"), "صد و دوازده");
        assert_eq!(words("125"), "صد و بیست و پنج");
        assert_eq!(words("999"), "نهصد و نود و نه");
    }

    #[test]
    fn test_scales() {
        assert_eq!(words("1000"), "یک هزار");
        assert_eq!(words("1001"), "یک هزار و یک");
        assert_eq!(words("1400"), "یک هزار و چهارصد");
        assert_eq!(words("2000000"), "دو میلیون");
        assert_eq!(words("1000001"), "یک میلیون و یک");
        assert_eq!(words("3000000000"), "سه میلیارد");
        assert_eq!(words("1000000000000"), "یک تریلیون");
        assert_eq!(
            words("1234567"),
            "یک میلیون و دویست و سی و چهار هزار و پانصد و شصت و هفت"
        );
    }

    #[test]
    fn test_formatted_input() {
        assert_eq!(words("۱،۴۰۰"), "یک هزار و چهارصد");
        assert_eq!(words("1,400"), "یک هزار و چهارصد");
        assert_eq!(words("007"), "هفت");
        assert_eq!(words("12.75"), "دوازده");
    }

    #[test]
    fn test_overflow() {
        assert_eq!(words("999999999999999"), "نهصد و نود و نه تریلیون و نهصد و نود و نه میلیارد و نهصد و نود و نه میلیون و نهصد و نود و نه هزار و نهصد و نود و نه");
        assert_eq!(words("1234567890123456"), "عدد بسیار بزرگ است!");
    }

    #[test]
    fn test_leading_zeros_count_towards_limit() {
        assert_eq!(words("000000000000001"), "یک");
        assert_eq!(words("0000000000000001"), "عدد بسیار بزرگ است!");
        assert_eq!(words("۰۰۰۰۰۰۰۰۰۰۰۰۰۰۰۱"), "عدد بسیار بزرگ است!");
    }

    #[test]
    fn test_configured_limit_and_words() {
        let settings = FormatSettings {
            max_digits: 6,
            overflow_message: "too large".to_string(),
            zero_word: "zero".to_string(),
            ..FormatSettings::default()
        };
        assert_eq!(to_words("0", &settings), "zero");
        assert_eq!(to_words("999999", &settings), "نهصد و نود و نه هزار و نهصد و نود و نه");
        assert_eq!(to_words("1000000", &settings), "too large");
    }

    #[test]
    fn test_split_chunks() {
        let values: Vec<u16> = split_chunks("1234567").iter().map(Chunk::value).collect();
        assert_eq!(values, vec![1, 234, 567]);
        let values: Vec<u16> = split_chunks("123456").iter().map(Chunk::value).collect();
        assert_eq!(values, vec![123, 456]);
        assert!(split_chunks("").is_empty());
    }

    proptest! {
        #[test]
        fn prop_spells_everything_below_sixteen_digits(n in "[1-9][0-9]{0,14}") {
            let spelled = words(&n);
            prop_assert!(!spelled.is_empty());
            prop_assert_ne!(spelled, "عدد بسیار بزرگ است!".to_string());
        }

        #[test]
        fn prop_leading_zeros_within_limit(n in 1u64..1_000_000_000_000u64) {
            prop_assert_eq!(words(&n.to_string()), words(&format!("000{}", n)));
        }

        #[test]
        fn prop_sixteen_digits_overflow(n in "[0-9]{16,24}") {
            prop_assert_eq!(words(&n), "عدد بسیار بزرگ است!".to_string());
        }
    }
}
