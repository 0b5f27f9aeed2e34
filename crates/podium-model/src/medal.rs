use std::fmt;

use serde::{Deserialize, Serialize};

/// A podium finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Maps a free-text medal type such as `"Gold Medal"` by case-insensitive
    /// substring, checking gold, then silver, then bronze.
    pub fn from_medal_type(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        if lowered.contains("gold") {
            Some(Self::Gold)
        } else if lowered.contains("silver") {
            Some(Self::Silver)
        } else if lowered.contains("bronze") {
            Some(Self::Bronze)
        } else {
            None
        }
    }

    /// Strict parse of a result-table medal cell. Only the exact labels count.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Gold" => Some(Self::Gold),
            "Silver" => Some(Self::Silver),
            "Bronze" => Some(Self::Bronze),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }

    /// Finishing position implied by the medal.
    pub fn position(self) -> u8 {
        match self {
            Self::Gold => 1,
            Self::Silver => 2,
            Self::Bronze => 3,
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the result-table team flag.
pub fn format_team_flag(is_team: bool) -> &'static str {
    if is_team { "True" } else { "False" }
}

/// Reads the result-table team flag; anything but `true` (any case) is false.
pub fn is_team_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
