//! Secondary-source tables and the lookups built from them once per run.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use podium_model::columns::secondary::{events, medallists};
use podium_model::{Medal, RowSet, cell};

/// Tables published by the secondary source.
#[derive(Debug, Clone, Default)]
pub struct SecondarySources {
    pub athletes: RowSet,
    pub events: RowSet,
    pub medallists: RowSet,
    pub teams: RowSet,
    pub nocs: RowSet,
}

pub(crate) const UNKNOWN_SPORT: &str = "Unknown";

/// Constant-time lookups shared by all synthesis passes.
#[derive(Debug, Default)]
pub(crate) struct SecondaryLookups {
    event_sports: HashMap<String, String>,
    medals: HashMap<(String, String), Medal>,
    team_events: HashSet<String>,
}

impl SecondaryLookups {
    /// Builds the event-to-sport map, the `(athlete code, event)` medal map
    /// and the set of team events. Tables lacking their columns contribute
    /// nothing and are reported in `warnings`.
    pub fn build(sources: &SecondarySources, warnings: &mut Vec<String>) -> Self {
        let mut lookups = Self::default();
        lookups.load_events(&sources.events, warnings);
        lookups.load_medallists(&sources.medallists, warnings);
        lookups
    }

    fn load_events(&mut self, table: &RowSet, warnings: &mut Vec<String>) {
        if table.headers.is_empty() {
            return;
        }
        let columns = table.columns(events::TABLE);
        let (event_idx, sport_idx) = match (
            columns.require(events::EVENT),
            columns.require(events::SPORT),
        ) {
            (Ok(event_idx), Ok(sport_idx)) => (event_idx, sport_idx),
            (Err(error), _) | (_, Err(error)) => {
                warn!(%error, "event to sport lookup unavailable");
                warnings.push(error.to_string());
                return;
            }
        };
        for row in &table.rows {
            let event = cell(row, event_idx).trim();
            if !event.is_empty() {
                self.event_sports
                    .insert(event.to_string(), cell(row, sport_idx).trim().to_string());
            }
        }
    }

    fn load_medallists(&mut self, table: &RowSet, warnings: &mut Vec<String>) {
        if table.headers.is_empty() {
            return;
        }
        let columns = table.columns(medallists::TABLE);
        let required = (
            columns.require(medallists::CODE_ATHLETE),
            columns.require(medallists::MEDAL_TYPE),
            columns.require(medallists::EVENT),
        );
        let (code_idx, medal_idx, event_idx) = match required {
            (Ok(code), Ok(medal), Ok(event)) => (code, medal, event),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => {
                warn!(%error, "medal lookup unavailable");
                warnings.push(error.to_string());
                return;
            }
        };
        let team_idx = columns.optional(medallists::CODE_TEAM);

        for row in &table.rows {
            let code = cell(row, code_idx).trim();
            let event = cell(row, event_idx).trim();
            if event.is_empty() {
                continue;
            }
            if !code.is_empty()
                && let Some(medal) = Medal::from_medal_type(cell(row, medal_idx))
            {
                self.medals
                    .insert((code.to_string(), event.to_string()), medal);
            }
            if let Some(team_idx) = team_idx
                && !cell(row, team_idx).trim().is_empty()
            {
                self.team_events.insert(event.to_string());
            }
        }
    }

    /// Sport for an event, `"Unknown"` when the event table lacks it.
    pub fn sport(&self, event: &str) -> &str {
        self.event_sports
            .get(event)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_SPORT)
    }

    pub fn medal(&self, athlete_code: &str, event: &str) -> Option<Medal> {
        self.medals
            .get(&(athlete_code.to_string(), event.to_string()))
            .copied()
    }

    pub fn is_team_event(&self, event: &str) -> bool {
        self.team_events.contains(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_lookups() {
        let sources = SecondarySources {
            events: RowSet::from_strs(&["event", "sport"], &[&["100m", "Athletics"]]),
            medallists: RowSet::from_strs(
                &["code_athlete", "medal_type", "event", "code_team"],
                &[
                    &["A1", "Gold Medal", "100m", ""],
                    &["A2", "Silver Medal", "4 x 100m Relay", "T1"],
                    &["A3", "Participant", "100m", ""],
                ],
            ),
            ..SecondarySources::default()
        };
        let mut warnings = Vec::new();
        let lookups = SecondaryLookups::build(&sources, &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(lookups.sport("100m"), "Athletics");
        assert_eq!(lookups.sport("Marathon"), "Unknown");
        assert_eq!(lookups.medal("A1", "100m"), Some(Medal::Gold));
        assert_eq!(lookups.medal("A3", "100m"), None);
        assert!(lookups.is_team_event("4 x 100m Relay"));
        assert!(!lookups.is_team_event("100m"));
    }

    #[test]
    fn test_missing_columns_warn() {
        let sources = SecondarySources {
            events: RowSet::from_strs(&["name", "sport"], &[]),
            ..SecondarySources::default()
        };
        let mut warnings = Vec::new();
        SecondaryLookups::build(&sources, &mut warnings);
        assert_eq!(warnings.len(), 1);
    }
}
