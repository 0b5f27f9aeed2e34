//! Tests for age computation.

use podium_transform::normalization::month_abbrev;
use podium_transform::{AgeError, age, age_at};
use proptest::prelude::*;

#[test]
fn test_birthday_not_yet_reached() {
    assert_eq!(age("15-Mar-2000", "10-Mar-2024"), "23");
}

#[test]
fn test_birthday_already_passed() {
    assert_eq!(age("15-Mar-2000", "20-Mar-2024"), "24");
}

#[test]
fn test_birthday_during_games_counts_as_passed() {
    assert_eq!(age("15-Mar-2000", "10-Mar-2024 to 20-Mar-2024"), "24");
}

#[test]
fn test_leap_day_birthday() {
    assert_eq!(age("29-Feb-2000", "28-Feb-2021"), "20");
    assert_eq!(age("29-Feb-2000", "01-Mar-2021"), "21");
}

#[test]
fn test_non_canonical_inputs_are_rejected() {
    assert_eq!(age("15 March 2000", "10-Mar-2024"), "");
    assert_eq!(age_at("15-mar-2000", "10-Mar-2024"), Err(AgeError::InvalidBirthDate));
}

fn canonical(day: u32, month: u32, year: i32) -> String {
    format!("{day:02}-{}-{year}", month_abbrev(month).unwrap())
}

proptest! {
    #[test]
    fn test_age_is_bounded_or_empty(
        b_day in 1u32..=28, b_month in 1u32..=12, b_year in 1700i32..2100,
        s_day in 1u32..=28, s_month in 1u32..=12, s_year in 1700i32..2100,
        span in 0u32..30,
    ) {
        let birth = canonical(b_day, b_month, b_year);
        let start = canonical(s_day, s_month, s_year);
        let end = canonical((s_day + span).min(28), s_month, s_year);
        for window in [start.clone(), format!("{start} to {end}")] {
            let value = age(&birth, &window);
            if !value.is_empty() {
                let years: i32 = value.parse().unwrap();
                prop_assert!((0..=120).contains(&years));
            }
        }
    }
}
