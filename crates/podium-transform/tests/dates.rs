//! Tests for date normalization.

use podium_transform::normalization::month_abbrev;
use podium_transform::{normalize_free, normalize_range, normalize_single};
use proptest::prelude::*;

#[test]
fn test_normalize_free_documented_cases() {
    assert_eq!(normalize_free("(1884)"), "01-Jan-1884");
    assert_eq!(normalize_free(""), "");
    assert_eq!(normalize_free("2021-07-23"), "23-Jul-2021");
}

#[test]
fn test_normalize_free_unknown_month_word_falls_back_to_year() {
    assert_eq!(normalize_free("12-Sept-1990"), "01-Jan-1990");
    assert_eq!(normalize_free("12-September-1990"), "12-Sep-1990");
    assert_eq!(normalize_free("12-Xyz-1990"), "");
}

#[test]
fn test_normalize_free_is_stable_on_canonical_input() {
    for value in ["01-Jan-1884", "23-Jul-2021", "31-Dec-1999"] {
        assert_eq!(normalize_free(value), value);
    }
}

#[test]
fn test_normalize_single_ignores_source_year() {
    assert_eq!(normalize_single("8 August 2021", 2020), "08-Aug-2020");
    assert_eq!(normalize_single("8 Aug", 2020), "08-Aug-2020");
}

#[test]
fn test_normalize_range_bare_day_start_borrows_end() {
    assert_eq!(
        normalize_range("25 – 31 December", 1999),
        "25-Dec-1999 to 31-Dec-1999"
    );
}

#[test]
fn test_normalize_range_cross_month() {
    assert_eq!(
        normalize_range("29 January – 14 February 2010", 2010),
        "29-Jan-2010 to 14-Feb-2010"
    );
}

proptest! {
    #[test]
    fn test_two_digit_year_pivot(day in 1u32..=28, month in 1u32..=12, year in 0u32..100) {
        let abbrev = month_abbrev(month).unwrap();
        let raw = format!("{day:02}-{abbrev}-{year:02}");
        let expected_year = if year < 8 { 2000 + year } else { 1900 + year };
        prop_assert_eq!(
            normalize_free(&raw),
            format!("{day:02}-{abbrev}-{expected_year}")
        );
    }

    #[test]
    fn test_range_is_idempotent(
        start_day in 1u32..=28,
        end_day in 1u32..=28,
        month in 1u32..=12,
        year in 1896i32..2030,
    ) {
        let abbrev = month_abbrev(month).unwrap();
        let canonical = format!("{start_day:02}-{abbrev}-{year} to {end_day:02}-{abbrev}-{year}");
        prop_assert_eq!(normalize_range(&canonical, year), canonical.clone());
        let again = normalize_range(&normalize_range(&canonical, year), year);
        prop_assert_eq!(again, canonical);
    }

    #[test]
    fn test_normalize_free_never_panics(raw in ".{0,40}") {
        let out = normalize_free(&raw);
        prop_assert!(out.is_empty() || out.len() >= 11);
    }
}
