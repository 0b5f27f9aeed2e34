//! Free-text date grammars found in the athlete and games tables.
//!
//! Three entry points, all returning a canonical `DD-Mon-YYYY` string or the
//! empty sentinel:
//!
//! - [`normalize_free`] for birthdates of unknown shape
//! - [`normalize_single`] for one games date whose year is known
//! - [`normalize_range`] for en-dash separated games date ranges
//!
//! The grammars are deliberately narrow. They cover the irregularities of
//! this dataset family and nothing more.

use std::sync::LazyLock;

use regex::Regex;

use super::canonical::{CanonicalDate, parse_month};

static ISO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("iso date regex"));

static DAY_MON_YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})-([A-Za-z]{3,})-(\d{2}|\d{4})$").expect("dd-Mon-yy regex")
});

static DAY_MONTH_YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s+([A-Za-z]+)\s+(\d{4})$").expect("dd Month yyyy regex")
});

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("year regex"));

/// Accepted range for ISO birthdates.
const ISO_YEAR_BOUNDS: std::ops::RangeInclusive<i32> = 1800..=2025;

/// Placeholders the games table uses for "no date".
const RANGE_PLACEHOLDERS: [&str; 3] = ["—", "--", "–"];

const RANGE_SEPARATOR: char = '–';

/// Expands a two-digit year: 00-07 map to 2000-2007, 08-99 to 1908-1999.
pub fn expand_two_digit_year(two_digit: u32) -> i32 {
    let two_digit = (two_digit % 100) as i32;
    if two_digit < 8 {
        2000 + two_digit
    } else {
        1900 + two_digit
    }
}

/// Normalizes a free-text birthdate.
///
/// Recognized, in priority order:
/// 1. ISO `yyyy-mm-dd`, year within 1800-2025
/// 2. `dd-Mon-yy` / `dd-Mon-yyyy`, month abbreviated or spelled out
/// 3. `dd Month yyyy`
/// 4. any text containing a 4-digit year, mapped to 1 January of that year
///
/// A string that matches the shape of (1), or of (2) with a three-letter month
/// token, but has an invalid component yields `""` without trying later rules.
/// A longer unrecognized month word (`12-Sept-1990`) falls through to (3) and
/// (4).
///
/// # Examples
/// ```
/// use podium_transform::normalize_free;
///
/// assert_eq!(normalize_free("2021-07-23"), "23-Jul-2021");
/// assert_eq!(normalize_free("11-Aug-41"), "11-Aug-1941");
/// assert_eq!(normalize_free("25 January 1884"), "25-Jan-1884");
/// assert_eq!(normalize_free("(1884)"), "01-Jan-1884");
/// assert_eq!(normalize_free("unknown"), "");
/// ```
pub fn normalize_free(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    if let Some(caps) = ISO_REGEX.captures(value) {
        let parsed = (
            caps[1].parse::<i32>().ok(),
            caps[2].parse::<u32>().ok(),
            caps[3].parse::<u32>().ok(),
        );
        return match parsed {
            (Some(year), Some(month), Some(day)) if ISO_YEAR_BOUNDS.contains(&year) => {
                render(CanonicalDate::new(year, month, day))
            }
            _ => String::new(),
        };
    }

    if let Some(caps) = DAY_MON_YEAR_REGEX.captures(value) {
        match parse_month(&caps[2]) {
            Some(month) => {
                let year_text = &caps[3];
                let year = match year_text.parse::<u32>() {
                    Ok(two) if year_text.len() == 2 => expand_two_digit_year(two),
                    Ok(full) => full as i32,
                    Err(_) => return String::new(),
                };
                let day = caps[1].parse::<u32>().unwrap_or(0);
                return render(CanonicalDate::new(year, month, day));
            }
            None if caps[2].len() == 3 => return String::new(),
            None => {}
        }
    }

    if let Some(caps) = DAY_MONTH_YEAR_REGEX.captures(value) {
        let month = parse_month(&caps[2]);
        let day = caps[1].parse::<u32>().ok();
        let year = caps[3].parse::<i32>().ok();
        if let (Some(month), Some(day), Some(year)) = (month, day, year)
            && let Some(date) = CanonicalDate::new(year, month, day)
        {
            return date.to_string();
        }
    }

    // Year only, possibly wrapped: "(1884)", "circa 1884", "c. 1884".
    YEAR_REGEX
        .find(value)
        .and_then(|found| found.as_str().parse::<i32>().ok())
        .and_then(|year| CanonicalDate::new(year, 1, 1))
        .map(|date| date.to_string())
        .unwrap_or_default()
}

/// Normalizes one games date, always emitting `authoritative_year`.
///
/// Accepts `D Month` and `D Month Y` (the source year is discarded), plus an
/// already-canonical date which is re-stamped with the authoritative year.
///
/// # Examples
/// ```
/// use podium_transform::normalize_single;
///
/// assert_eq!(normalize_single("6 April", 1896), "06-Apr-1896");
/// assert_eq!(normalize_single("23 July 2021", 2020), "23-Jul-2020");
/// assert_eq!(normalize_single("July", 2020), "");
/// ```
pub fn normalize_single(raw: &str, authoritative_year: i32) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }
    if let Some(date) = CanonicalDate::parse_strict(value) {
        return render(CanonicalDate::new(authoritative_year, date.month, date.day));
    }

    let tokens: Vec<&str> = value.split_whitespace().collect();
    let (day, month) = match tokens.as_slice() {
        [day, month] => (*day, *month),
        [day, month, year] if is_digits(year) => (*day, *month),
        _ => return String::new(),
    };
    if !is_digits(day) {
        return String::new();
    }
    let Some(month) = parse_month(month) else {
        return String::new();
    };
    let day = day.parse::<u32>().unwrap_or(0);
    render(CanonicalDate::new(authoritative_year, month, day))
}

/// Normalizes a games date range into `"start to end"`.
///
/// The end part is normalized first; its year then resolves the start part,
/// and a bare-day start borrows the end's month and year. Text without a
/// usable separator falls back to [`normalize_single`]. An already-canonical
/// `"A to B"` is returned unchanged, so the function is idempotent on its own
/// output.
///
/// # Examples
/// ```
/// use podium_transform::normalize_range;
///
/// assert_eq!(
///     normalize_range("21 July – 8 August 2021", 2020),
///     "21-Jul-2020 to 08-Aug-2020"
/// );
/// assert_eq!(normalize_range("6 – 13 April", 1896), "06-Apr-1896 to 13-Apr-1896");
/// assert_eq!(normalize_range("—", 1896), "");
/// ```
pub fn normalize_range(raw: &str, authoritative_year: i32) -> String {
    let value = raw.trim();
    if value.is_empty() || RANGE_PLACEHOLDERS.contains(&value) {
        return String::new();
    }
    if is_canonical_range(value) {
        return value.to_string();
    }

    if let Some((start_raw, end_raw)) = value.split_once(RANGE_SEPARATOR) {
        let start_raw = start_raw.trim();
        let end_raw = end_raw.trim();

        let end_text = normalize_single(end_raw, authoritative_year);
        let Some(end) = CanonicalDate::parse_strict(&end_text) else {
            return String::new();
        };
        let actual_year = end.year;

        let start = if is_digits(start_raw) {
            start_raw
                .parse::<u32>()
                .ok()
                .and_then(|day| CanonicalDate::new(end.year, end.month, day))
                .map(|date| date.to_string())
                .unwrap_or_default()
        } else {
            normalize_single(start_raw, actual_year)
        };
        if !start.is_empty() {
            return format!("{start} to {end_text}");
        }
    }

    normalize_single(value, authoritative_year)
}

fn is_canonical_range(value: &str) -> bool {
    value
        .split_once(" to ")
        .is_some_and(|(start, end)| {
            CanonicalDate::parse_strict(start).is_some()
                && CanonicalDate::parse_strict(end).is_some()
        })
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

fn render(date: Option<CanonicalDate>) -> String {
    date.map(|date| date.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_pivot_boundaries() {
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(7), 2007);
        assert_eq!(expand_two_digit_year(8), 1908);
        assert_eq!(expand_two_digit_year(99), 1999);
    }

    #[test]
    fn test_iso_out_of_bounds_is_empty() {
        assert_eq!(normalize_free("1799-01-01"), "");
        assert_eq!(normalize_free("2026-01-01"), "");
        assert_eq!(normalize_free("2000-13-01"), "");
        assert_eq!(normalize_free("2000-01-32"), "");
    }

    #[test]
    fn test_iso_with_surrounding_space() {
        assert_eq!(normalize_free("  1990-02-03 "), "03-Feb-1990");
    }

    #[test]
    fn test_day_mon_year_variants() {
        assert_eq!(normalize_free("02-Feb-1997"), "02-Feb-1997");
        assert_eq!(normalize_free("2-feb-05"), "02-Feb-2005");
        assert_eq!(normalize_free("2-February-1997"), "02-Feb-1997");
        assert_eq!(normalize_free("40-Feb-1997"), "");
        assert_eq!(normalize_free("02-Foo-1997"), "");
    }

    #[test]
    fn test_day_month_year_falls_back_to_year() {
        assert_eq!(normalize_free("25 Foo 1884"), "01-Jan-1884");
    }

    #[test]
    fn test_year_in_text() {
        assert_eq!(normalize_free("circa 1884"), "01-Jan-1884");
        assert_eq!(normalize_free("c. 1790"), "01-Jan-1790");
        assert_eq!(normalize_free("born in 1901 in Paris"), "01-Jan-1901");
    }

    #[test]
    fn test_blank_inputs() {
        assert_eq!(normalize_free(""), "");
        assert_eq!(normalize_free("   "), "");
        assert_eq!(normalize_single("", 2000), "");
        assert_eq!(normalize_range("", 2000), "");
    }

    #[test]
    fn test_single_rejects_non_numeric_year_token() {
        assert_eq!(normalize_single("23 July twenty", 2020), "");
        assert_eq!(normalize_single("July 23", 2020), "");
        assert_eq!(normalize_single("0 July", 2020), "");
    }

    #[test]
    fn test_single_restamps_canonical() {
        assert_eq!(normalize_single("23-Jul-2021", 2020), "23-Jul-2020");
        assert_eq!(normalize_single("23-Jul-2020", 2020), "23-Jul-2020");
    }

    #[test]
    fn test_range_full_dates() {
        assert_eq!(
            normalize_range("3 August 1980 – 10 August 1980", 1980),
            "03-Aug-1980 to 10-Aug-1980"
        );
    }

    #[test]
    fn test_range_without_separator_is_single() {
        assert_eq!(normalize_range("23 July 2021", 2020), "23-Jul-2020");
    }

    #[test]
    fn test_range_with_bad_end_is_empty() {
        assert_eq!(normalize_range("21 July – sometime", 2020), "");
    }

    #[test]
    fn test_range_with_bad_start_falls_back() {
        assert_eq!(normalize_range("sometime – 8 August", 2020), "");
    }

    #[test]
    fn test_range_placeholders() {
        for placeholder in ["—", "--", "–", " – "] {
            assert_eq!(normalize_range(placeholder, 2000), "");
        }
    }

    #[test]
    fn test_range_idempotent() {
        let once = normalize_range("4 – 22 February", 2018);
        assert_eq!(once, "04-Feb-2018 to 22-Feb-2018");
        assert_eq!(normalize_range(&once, 2018), once);
    }
}
