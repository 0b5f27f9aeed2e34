//! Pure, row-independent normalization used by the reconciliation stages.
//!
//! Nothing in this crate touches a row-set. Every function is total over its
//! input: unparseable text yields the empty sentinel or an empty list.

pub mod age;
pub mod lists;
pub mod names;
pub mod normalization;

pub use age::{AgeError, EventWindow, age, age_at};
pub use lists::{ListStrategy, ParsedList, parse_serialized_list};
pub use names::{NameOrder, detect_name_order, normalize_secondary_name, title_case};
pub use normalization::{CanonicalDate, normalize_free, normalize_range, normalize_single};
