//! Date normalization into the canonical `DD-Mon-YYYY` form.

pub mod canonical;
pub mod dates;

pub use canonical::{CanonicalDate, month_abbrev, parse_month};
pub use dates::{expand_two_digit_year, normalize_free, normalize_range, normalize_single};
