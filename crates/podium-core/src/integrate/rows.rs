//! Column positions and row synthesis for the primary tables.

use std::collections::HashMap;

use podium_model::columns::{athlete, result};
use podium_model::{Medal, Result, RowSet, TargetEdition, cell, format_team_flag};

/// Resolved positions in the athlete table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AthleteColumns {
    pub id: usize,
    pub name: usize,
    pub sex: usize,
    pub born: usize,
    pub noc: usize,
    pub height: Option<usize>,
    pub weight: Option<usize>,
    pub country: Option<usize>,
}

impl AthleteColumns {
    pub fn resolve(athletes: &RowSet) -> Result<Self> {
        let columns = athletes.columns(athlete::TABLE);
        Ok(Self {
            id: columns.require(athlete::ID)?,
            name: columns.require(athlete::NAME)?,
            sex: columns.require(athlete::SEX)?,
            born: columns.require(athlete::BORN)?,
            noc: columns.require(athlete::NOC)?,
            height: columns.optional(athlete::HEIGHT),
            weight: columns.optional(athlete::WEIGHT),
            country: columns.optional(athlete::COUNTRY),
        })
    }
}

/// Resolved positions in the result table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResultColumns {
    pub edition: usize,
    pub edition_id: usize,
    pub noc: usize,
    pub sport: usize,
    pub event: usize,
    pub result_id: usize,
    pub athlete: usize,
    pub athlete_id: usize,
    pub pos: usize,
    pub medal: usize,
    pub team: usize,
}

impl ResultColumns {
    pub fn resolve(results: &RowSet) -> Result<Self> {
        let columns = results.columns(result::TABLE);
        Ok(Self {
            edition: columns.require(result::EDITION)?,
            edition_id: columns.require(result::EDITION_ID)?,
            noc: columns.require(result::NOC)?,
            sport: columns.require(result::SPORT)?,
            event: columns.require(result::EVENT)?,
            result_id: columns.require(result::RESULT_ID)?,
            athlete: columns.require(result::ATHLETE)?,
            athlete_id: columns.require(result::ATHLETE_ID)?,
            pos: columns.require(result::POS)?,
            medal: columns.require(result::MEDAL)?,
            team: columns.require(result::TEAM)?,
        })
    }

    /// Writes medal and position into an existing row.
    pub fn set_medal(&self, row: &mut [String], medal: Option<Medal>) {
        match medal {
            Some(medal) => {
                row[self.medal] = medal.as_str().to_string();
                row[self.pos] = medal.position().to_string();
            }
            None => {
                row[self.medal].clear();
                row[self.pos].clear();
            }
        }
    }
}

/// Everything that varies between synthesized result rows.
#[derive(Debug, Clone)]
pub(crate) struct NewResult<'a> {
    pub noc: &'a str,
    pub sport: &'a str,
    pub event: &'a str,
    pub athlete_name: &'a str,
    pub athlete_id: &'a str,
    pub medal: Option<Medal>,
    pub is_team: bool,
}

impl NewResult<'_> {
    /// Builds a full row tagged with the target edition.
    pub fn to_row(
        &self,
        width: usize,
        columns: &ResultColumns,
        target: &TargetEdition,
        result_id: String,
    ) -> Vec<String> {
        let mut row = vec![String::new(); width];
        row[columns.edition] = target.name.clone();
        row[columns.edition_id] = target.edition_id.clone();
        row[columns.noc] = self.noc.to_string();
        row[columns.sport] = self.sport.to_string();
        row[columns.event] = self.event.to_string();
        row[columns.result_id] = result_id;
        row[columns.athlete] = self.athlete_name.to_string();
        row[columns.athlete_id] = self.athlete_id.to_string();
        columns.set_medal(&mut row, self.medal);
        row[columns.team] = format_team_flag(self.is_team).to_string();
        row
    }
}

/// `(athlete id, event name)` to row position for the target edition.
///
/// Shared by every synthesis pass so that no pair is written twice, across
/// passes or across runs.
#[derive(Debug, Default)]
pub(crate) struct EventLedger {
    rows: HashMap<(String, String), usize>,
}

impl EventLedger {
    /// Seeds from result rows already tagged with the target edition.
    pub fn seed(results: &RowSet, columns: &ResultColumns, edition_id: &str) -> Self {
        let mut ledger = Self::default();
        for (idx, row) in results.rows.iter().enumerate() {
            if cell(row, columns.edition_id).trim() != edition_id {
                continue;
            }
            let athlete_id = cell(row, columns.athlete_id).trim();
            let event = cell(row, columns.event).trim();
            if !athlete_id.is_empty() && !event.is_empty() {
                ledger
                    .rows
                    .entry((athlete_id.to_string(), event.to_string()))
                    .or_insert(idx);
            }
        }
        ledger
    }

    pub fn get(&self, athlete_id: &str, event: &str) -> Option<usize> {
        self.rows
            .get(&(athlete_id.to_string(), event.to_string()))
            .copied()
    }

    pub fn contains(&self, athlete_id: &str, event: &str) -> bool {
        self.get(athlete_id, event).is_some()
    }

    pub fn record(&mut self, athlete_id: &str, event: &str, row_idx: usize) {
        self.rows
            .insert((athlete_id.to_string(), event.to_string()), row_idx);
    }
}
