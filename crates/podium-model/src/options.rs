//! Configuration options for a reconciliation run.

use serde::{Deserialize, Serialize};

/// How the target edition is detected and which dates it is forced to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetEditionOptions {
    /// Edition year that must match exactly.
    pub year: i32,
    /// Case-insensitive substring of the host city.
    pub city: String,
    /// Fallback display name when the games row carries none.
    pub edition_name: String,
    pub start_date: String,
    pub end_date: String,
    pub competition_date: String,
}

impl Default for TargetEditionOptions {
    fn default() -> Self {
        Self {
            year: 2024,
            city: "paris".to_string(),
            edition_name: "2024 Summer Olympics".to_string(),
            start_date: "26-Jul-2024".to_string(),
            end_date: "11-Aug-2024".to_string(),
            competition_date: "24-Jul-2024 to 11-Aug-2024".to_string(),
        }
    }
}

impl TargetEditionOptions {
    /// True when a games row describes the target edition.
    ///
    /// The year must match; then either the city contains the configured
    /// substring or the edition text mentions the year.
    pub fn matches(&self, year: i32, city: &str, edition: &str) -> bool {
        year == self.year
            && (city.to_lowercase().contains(&self.city.to_lowercase())
                || edition.contains(&self.year.to_string()))
    }
}

/// Options for the whole pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileOptions {
    pub target: TargetEditionOptions,
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: TargetEditionOptions) -> Self {
        self.target = target;
        self
    }
}
