//! Age of an athlete at an edition, from canonical dates.
//!
//! The baseline is the age on the first day of the event window. When the
//! window is a range and the birthday, projected onto the start year, falls
//! inside it (inclusive), the birthday is treated as already passed and one
//! year is added. This is a dataset convention, not calendar arithmetic.

use thiserror::Error;

use crate::normalization::CanonicalDate;

/// Largest age accepted as plausible.
pub const MAX_AGE: i32 = 120;

/// Why an age could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeError {
    /// Birthdate or event window is blank.
    #[error("birthdate or event window missing")]
    Missing,
    #[error("birthdate is not a canonical date")]
    InvalidBirthDate,
    #[error("event window is not a canonical date or range")]
    InvalidEventWindow,
    #[error("computed age {0} is outside 0..=120")]
    OutOfRange(i32),
}

/// A single date or an inclusive `"A to B"` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub start: CanonicalDate,
    pub end: Option<CanonicalDate>,
}

impl EventWindow {
    /// Parses `"DD-Mon-YYYY"` or `"DD-Mon-YYYY to DD-Mon-YYYY"`.
    ///
    /// An empty end part (`"A to"`) is read as a single date.
    pub fn parse(value: &str) -> Option<Self> {
        let (start, end) = match value.split_once("to") {
            Some((start, end)) => (start.trim(), end.trim()),
            None => (value.trim(), ""),
        };
        let start = CanonicalDate::parse_strict(start)?;
        let end = if end.is_empty() {
            None
        } else {
            Some(CanonicalDate::parse_strict(end)?)
        };
        Some(Self { start, end })
    }
}

/// Computes the age in whole years, reporting why it failed.
pub fn age_at(birth: &str, event_window: &str) -> Result<u32, AgeError> {
    if birth.trim().is_empty() || event_window.trim().is_empty() {
        return Err(AgeError::Missing);
    }
    let birth = CanonicalDate::parse_strict(birth).ok_or(AgeError::InvalidBirthDate)?;
    let window = EventWindow::parse(event_window).ok_or(AgeError::InvalidEventWindow)?;
    let start = window.start;

    let mut age = start.year - birth.year;
    if start.month_day() < birth.month_day() {
        age -= 1;
    }
    if let Some(end) = window.end {
        let birthday = (start.year, birth.month, birth.day);
        let lower = (start.year, start.month, start.day);
        let upper = (end.year, end.month, end.day);
        if lower <= birthday && birthday <= upper {
            age += 1;
        }
    }

    if (0..=MAX_AGE).contains(&age) {
        Ok(age as u32)
    } else {
        Err(AgeError::OutOfRange(age))
    }
}

/// Row-level age: the integer as text, or `""` for any failure.
///
/// # Examples
/// ```
/// use podium_transform::age;
///
/// assert_eq!(age("15-Mar-2000", "10-Mar-2024"), "23");
/// assert_eq!(age("15-Mar-2000", "20-Mar-2024"), "24");
/// assert_eq!(age("15-Mar-2000", "10-Mar-2024 to 20-Mar-2024"), "24");
/// assert_eq!(age("", "10-Mar-2024"), "");
/// ```
pub fn age(birth: &str, event_window: &str) -> String {
    age_at(birth, event_window)
        .map(|years| years.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(age_at("", "10-Mar-2024"), Err(AgeError::Missing));
        assert_eq!(age_at("15-Mar-2000", " "), Err(AgeError::Missing));
        assert_eq!(
            age_at("2000-03-15", "10-Mar-2024"),
            Err(AgeError::InvalidBirthDate)
        );
        assert_eq!(
            age_at("15-Mar-2000", "10-MAR-2024"),
            Err(AgeError::InvalidEventWindow)
        );
        assert_eq!(
            age_at("15-Mar-2000", "10-Mar-2024 to soon"),
            Err(AgeError::InvalidEventWindow)
        );
        assert_eq!(
            age_at("15-Mar-2030", "10-Mar-2024"),
            Err(AgeError::OutOfRange(-7))
        );
        assert_eq!(
            age_at("15-Mar-1800", "10-Mar-2024"),
            Err(AgeError::OutOfRange(223))
        );
    }

    #[test]
    fn test_birthday_on_start_day() {
        // Birthday equals the start date: baseline is already the new age,
        // and the in-window adjustment still applies.
        assert_eq!(age_at("10-Mar-2000", "10-Mar-2024"), Ok(24));
        assert_eq!(age_at("10-Mar-2000", "10-Mar-2024 to 12-Mar-2024"), Ok(25));
    }

    #[test]
    fn test_birthday_outside_window() {
        assert_eq!(age_at("25-Mar-2000", "10-Mar-2024 to 20-Mar-2024"), Ok(23));
    }

    #[test]
    fn test_trailing_to_is_single_date() {
        let window = EventWindow::parse("10-Mar-2024 to").unwrap();
        assert!(window.end.is_none());
    }
}
