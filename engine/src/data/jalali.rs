// Jalali (Solar Hijri) calendar conversion for date fields and report headers
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

use crate::error::{EngineError, Result};
use crate::transforms::digits::{to_latin_digits, to_persian_digits};

pub const DEFAULT_TIME: &str = "00:00";

// Jalali years at which the 33-year leap cycle shifts. Arithmetic is valid
// for -61 <= year < 3178.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

struct YearInfo {
    // Years since the last leap year; 0 means `year` itself is leap.
    leap: i32,
    gregorian_year: i32,
    // Day of Gregorian March on which Farvardin 1 falls.
    march: u32,
}

fn year_info(year: i32) -> Result<YearInfo> {
    let last = BREAKS[BREAKS.len() - 1];
    if year < BREAKS[0] || year >= last {
        return Err(EngineError::InvalidJalaliDate(format!(
            "year {} is outside the supported range {}..{}",
            year, BREAKS[0], last
        )));
    }

    let gregorian_year = year + 621;
    // Count Jalali leap days since the first break: 8 per full 33-year cycle
    // plus one every 4 years of the partial cycle.
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    // `n` is the offset of `year` inside the cycle that contains it
    let mut n = year - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Gregorian leap days over the same span; the difference moves Nowruz
    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    // The last years of a cycle belong to the next one for leap purposes
    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(YearInfo {
        leap,
        gregorian_year,
        march: march as u32,
    })
}

pub fn is_leap_year(year: i32) -> bool {
    year_info(year).map(|info| info.leap == 0).unwrap_or(false)
}

pub fn month_length(year: i32, month: u32) -> Option<u32> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        12 if is_leap_year(year) => Some(30),
        12 => Some(29),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
}

impl JalaliDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        year_info(year)?;
        let max_day = month_length(year, month).ok_or_else(|| {
            EngineError::InvalidJalaliDate(format!("month {} is not between 1 and 12", month))
        })?;
        if day == 0 || day > max_day {
            return Err(EngineError::InvalidJalaliDate(format!(
                "day {} is not valid for {}/{:02}",
                day, year, month
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn to_gregorian(&self) -> Result<NaiveDate> {
        let info = year_info(self.year)?;
        let m = self.month as u64;
        let offset = (m - 1) * 31 - (m / 7) * m.saturating_sub(7) + self.day as u64 - 1;
        NaiveDate::from_ymd_opt(info.gregorian_year, 3, info.march)
            .and_then(|nowruz| nowruz.checked_add_days(Days::new(offset)))
            .ok_or_else(|| EngineError::InvalidJalaliDate(format!("{} has no Gregorian equivalent", self)))
    }

    pub fn from_gregorian(date: NaiveDate) -> Result<Self> {
        let gregorian_year = date.year();
        let mut year = gregorian_year - 621;
        let info = year_info(year)?;
        let nowruz = NaiveDate::from_ymd_opt(gregorian_year, 3, info.march).ok_or_else(|| {
            EngineError::InvalidJalaliDate(format!("no Nowruz date for Gregorian year {}", gregorian_year))
        })?;

        // days since Farvardin 1; the first six months have 31 days (186 in total)
        let mut k = date.signed_duration_since(nowruz).num_days();
        if k >= 0 {
            if k <= 185 {
                return Ok(Self {
                    year,
                    month: 1 + (k / 31) as u32,
                    day: (k % 31) as u32 + 1,
                });
            }
            k -= 186;
        } else {
            // still in the previous Jalali year, counting back from its Mehr 1
            year -= 1;
            k += 179;
            if info.leap == 1 {
                k += 1;
            }
        }

        Ok(Self {
            year,
            month: 7 + (k / 30) as u32,
            day: (k % 30) as u32 + 1,
        })
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Parses `YYYY/MM/DD` or `YYYY/MM/DD HH:MM` (Persian digits accepted) into a
/// Gregorian date-time. Empty input yields `None`.
pub fn parse_jalali_datetime(text: &str, default_time: &str) -> Result<Option<NaiveDateTime>> {
    let latin = to_latin_digits(text.trim());
    if latin.is_empty() {
        return Ok(None);
    }
    let invalid = |reason: &str| {
        EngineError::InvalidJalaliDate(format!(
            "'{}' ({}); expected a value like 1404/01/17 12:30",
            text, reason
        ))
    };

    let mut parts = latin.split_whitespace();
    let date_part = parts.next().ok_or_else(|| invalid("missing date"))?;
    let time_part = parts.next().unwrap_or(default_time);
    if parts.next().is_some() {
        return Err(invalid("unexpected trailing text"));
    }

    let fields: Vec<&str> = date_part.split('/').collect();
    if fields.len() != 3 {
        return Err(invalid("date must have year/month/day"));
    }
    let year: i32 = fields[0].parse().map_err(|_| invalid("bad year"))?;
    let month: u32 = fields[1].parse().map_err(|_| invalid("bad month"))?;
    let day: u32 = fields[2].parse().map_err(|_| invalid("bad day"))?;

    let time = NaiveTime::parse_from_str(time_part, "%H:%M").map_err(|_| invalid("bad time"))?;
    let date = JalaliDate::new(year, month, day)?.to_gregorian()?;
    Ok(Some(date.and_time(time)))
}

pub fn validate_jalali_format(text: &str) -> bool {
    parse_jalali_datetime(text, DEFAULT_TIME).is_ok()
}

/// Renders a Gregorian date-time as a Jalali string. Supported tokens:
/// `%Y %m %d %H %M %S %%`.
pub fn format_jalali(datetime: &NaiveDateTime, pattern: &str, persian_digits: bool) -> Result<String> {
    let date = JalaliDate::from_gregorian(datetime.date())?;
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('Y') => out.push_str(&format!("{:04}", date.year())),
            Some('m') => out.push_str(&format!("{:02}", date.month())),
            Some('d') => out.push_str(&format!("{:02}", date.day())),
            Some('H') => out.push_str(&format!("{:02}", datetime.hour())),
            Some('M') => out.push_str(&format!("{:02}", datetime.minute())),
            Some('S') => out.push_str(&format!("{:02}", datetime.second())),
            Some('%') => out.push('%'),
            Some(other) => {
                return Err(EngineError::InvalidPattern(format!(
                    "unsupported token '%{}' in '{}'",
                    other, pattern
                )))
            }
            None => {
                return Err(EngineError::InvalidPattern(format!("dangling '%' in '{}'", pattern)))
            }
        }
    }

    Ok(if persian_digits { to_persian_digits(&out) } else { out })
}
