//! The canonical date representation shared by every stage.

use std::fmt;
use std::sync::LazyLock;

use chrono::Month;
use regex::Regex;

/// Strict canonical grammar: 1-2 digit day, capitalized 3-letter month, 4-digit year.
static CANONICAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})-([A-Z][a-z]{2})-(\d{4})$").expect("canonical date regex")
});

/// A calendar date in `DD-Mon-YYYY` form.
///
/// Ordering compares `(year, month, day)`. The day is only range-checked
/// against 1..=31, so `31-Feb-2001` is representable; age arithmetic works
/// on tuples and never needs a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CanonicalDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some(Self { year, month, day })
        } else {
            None
        }
    }

    /// Parses the strict canonical grammar (surrounding whitespace allowed).
    ///
    /// # Examples
    /// ```
    /// use podium_transform::CanonicalDate;
    ///
    /// let date = CanonicalDate::parse_strict("05-Mar-2000").unwrap();
    /// assert_eq!((date.year, date.month, date.day), (2000, 3, 5));
    /// assert!(CanonicalDate::parse_strict("05-MAR-2000").is_none());
    /// assert!(CanonicalDate::parse_strict("2000-03-05").is_none());
    /// ```
    pub fn parse_strict(value: &str) -> Option<Self> {
        let caps = CANONICAL_REGEX.captures(value.trim())?;
        let day: u32 = caps[1].parse().ok()?;
        let month = abbrev_number(&caps[2])?;
        let year: i32 = caps[3].parse().ok()?;
        Self::new(year, month, day)
    }

    /// `(month, day)` pair used for birthday comparisons.
    pub fn month_day(self) -> (u32, u32) {
        (self.month, self.day)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbrev = month_abbrev(self.month).unwrap_or("???");
        write!(f, "{:02}-{}-{:04}", self.day, abbrev, self.year)
    }
}

/// Three-letter capitalized English abbreviation for a month number.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    let month = Month::try_from(month).ok()?;
    Some(&month.name()[..3])
}

/// Month number from a full English name or 3-letter abbreviation, any case.
pub fn parse_month(name: &str) -> Option<u32> {
    let month: Month = name.trim().parse().ok()?;
    Some(month.number_from_month())
}

/// Month number from an exact canonical abbreviation (`Jan`, not `jan`).
fn abbrev_number(abbrev: &str) -> Option<u32> {
    (1..=12).find(|&month| month_abbrev(month) == Some(abbrev))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_day() {
        let date = CanonicalDate::new(1884, 1, 1).unwrap();
        assert_eq!(date.to_string(), "01-Jan-1884");
    }

    #[test]
    fn test_parse_month_names() {
        assert_eq!(parse_month("January"), Some(1));
        assert_eq!(parse_month("aug"), Some(8));
        assert_eq!(parse_month("SEPTEMBER"), Some(9));
        assert_eq!(parse_month("Sept"), None);
        assert_eq!(parse_month("Foo"), None);
    }

    #[test]
    fn test_month_abbrev() {
        assert_eq!(month_abbrev(5), Some("May"));
        assert_eq!(month_abbrev(12), Some("Dec"));
        assert_eq!(month_abbrev(0), None);
        assert_eq!(month_abbrev(13), None);
    }

    #[test]
    fn test_parse_strict_rejects_bad_day() {
        assert!(CanonicalDate::parse_strict("32-Jan-2000").is_none());
        assert!(CanonicalDate::parse_strict("0-Jan-2000").is_none());
        assert!(CanonicalDate::parse_strict("1-Jan-2000").is_some());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = CanonicalDate::parse_strict("31-Dec-1999").unwrap();
        let b = CanonicalDate::parse_strict("01-Jan-2000").unwrap();
        assert!(a < b);
    }
}
