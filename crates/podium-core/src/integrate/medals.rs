//! Medal-only pass.

use tracing::debug;

use podium_model::columns::secondary::medallists;
use podium_model::{Medal, Result, RowSet, cell};
use podium_transform::normalize_secondary_name;

use super::rows::NewResult;
use super::{Integration, ResolvedAthlete};

#[derive(Debug, Clone, Copy)]
struct MedallistColumns {
    code: usize,
    name: usize,
    noc: usize,
    event: usize,
    medal_type: usize,
    gender: Option<usize>,
}

impl MedallistColumns {
    fn resolve(table: &RowSet) -> Result<Self> {
        let columns = table.columns(medallists::TABLE);
        Ok(Self {
            code: columns.require(medallists::CODE_ATHLETE)?,
            name: columns.require(medallists::NAME)?,
            noc: columns.require(medallists::COUNTRY_CODE)?,
            event: columns.require(medallists::EVENT)?,
            medal_type: columns.require(medallists::MEDAL_TYPE)?,
            gender: columns.optional(medallists::GENDER),
        })
    }
}

/// Sex for a minimal athlete: only the first letter is trusted.
fn coarse_sex(gender: &str) -> &'static str {
    match gender.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('m') => "Male",
        Some('f') => "Female",
        _ => "",
    }
}

impl Integration<'_> {
    /// Ensures every medallist `(athlete, event)` pair has a result row.
    ///
    /// A medal-less row already written for the pair this run (a roster row)
    /// receives the medal in place. Pairs with no row get a medal-only row.
    /// Unresolvable medallists become minimal athletes with no birthdate.
    pub(super) fn integrate_medallists(&mut self, table: &RowSet) {
        if table.headers.is_empty() {
            debug!("no secondary medallist table");
            return;
        }
        let columns = match MedallistColumns::resolve(table) {
            Ok(columns) => columns,
            Err(error) => {
                self.warn_pass_disabled(&error);
                return;
            }
        };

        for row in &table.rows {
            let code = cell(row, columns.code).trim();
            let name = normalize_secondary_name(cell(row, columns.name), "");
            let noc = cell(row, columns.noc).trim().to_uppercase();
            let event = cell(row, columns.event).trim();
            if code.is_empty() || name.is_empty() || noc.is_empty() || event.is_empty() {
                self.stats.skipped_records += 1;
                continue;
            }
            let gender = columns
                .gender
                .map(|idx| cell(row, idx).trim())
                .unwrap_or("");
            let athlete = match self.resolve(code, &name, &noc) {
                Some(athlete) => athlete,
                None => self.create_minimal_athlete(code, &name, &noc, gender),
            };
            let medal = Medal::from_medal_type(cell(row, columns.medal_type));

            if let Some(row_idx) = self.ledger.get(&athlete.athlete_id, event) {
                let result_columns = self.result_columns;
                let existing = &mut self.results.rows[row_idx];
                if medal.is_some() && existing[result_columns.medal].trim().is_empty() {
                    result_columns.set_medal(existing, medal);
                    self.stats.medals_attached += 1;
                }
                continue;
            }

            let sport = self.lookups.sport(event).to_string();
            let new = NewResult {
                noc: &noc,
                sport: &sport,
                event,
                athlete_name: &athlete.name,
                athlete_id: &athlete.athlete_id,
                medal,
                is_team: self.lookups.is_team_event(event),
            };
            if self.push_result(&new) {
                self.stats.medal_only_rows += 1;
            }
        }
    }

    fn create_minimal_athlete(
        &mut self,
        code: &str,
        name: &str,
        noc: &str,
        gender: &str,
    ) -> ResolvedAthlete {
        let columns = self.athlete_columns;
        let athlete_id = self.athlete_ids.allocate();
        let mut row = self.athletes.blank_row();
        row[columns.id] = athlete_id.clone();
        row[columns.name] = name.to_string();
        row[columns.sex] = coarse_sex(gender).to_string();
        row[columns.noc] = noc.to_string();
        debug!(athlete_id = %athlete_id, code, "created athlete from medal record");
        self.push_athlete(row);

        let resolved = ResolvedAthlete {
            athlete_id,
            name: name.to_string(),
        };
        self.by_code.insert(code.to_string(), resolved.clone());
        resolved
    }
}
