//! Team roster pass.

use tracing::debug;

use podium_model::columns::secondary::teams;
use podium_model::{Result, RowSet, cell};
use podium_transform::{normalize_secondary_name, parse_serialized_list};

use super::Integration;
use super::rows::NewResult;

#[derive(Debug, Clone, Copy)]
struct TeamColumns {
    country: usize,
    discipline: usize,
    event: usize,
    athletes: usize,
    codes: usize,
}

impl TeamColumns {
    fn resolve(table: &RowSet) -> Result<Self> {
        let columns = table.columns(teams::TABLE);
        columns.require(teams::TEAM)?;
        Ok(Self {
            country: columns.require(teams::COUNTRY_CODE)?,
            discipline: columns.require(teams::DISCIPLINE)?,
            event: columns.require(teams::EVENTS)?,
            athletes: columns.require(teams::ATHLETES)?,
            codes: columns.require(teams::ATHLETES_CODES)?,
        })
    }
}

impl Integration<'_> {
    /// Writes one medal-less team row per resolved roster member.
    ///
    /// Names and codes are paired positionally; the shorter list wins.
    /// Members that resolve to no athlete are skipped, never created.
    pub(super) fn integrate_teams(&mut self, table: &RowSet) {
        if table.headers.is_empty() {
            debug!("no secondary team table");
            return;
        }
        let columns = match TeamColumns::resolve(table) {
            Ok(columns) => columns,
            Err(error) => {
                self.warn_pass_disabled(&error);
                return;
            }
        };

        for row in &table.rows {
            let noc = cell(row, columns.country).trim().to_uppercase();
            let event = cell(row, columns.event).trim();
            if noc.is_empty() || event.is_empty() {
                self.stats.skipped_records += 1;
                continue;
            }
            let sport = cell(row, columns.discipline).trim();
            let names = parse_serialized_list(cell(row, columns.athletes)).items;
            let codes = parse_serialized_list(cell(row, columns.codes)).items;

            for (raw_name, code) in names.iter().zip(&codes) {
                let name = normalize_secondary_name(raw_name, "");
                let Some(member) = self.resolve(code, &name, &noc) else {
                    debug!(code = %code, name = %name, event, "roster member not resolved");
                    self.stats.skipped_records += 1;
                    continue;
                };
                let new = NewResult {
                    noc: &noc,
                    sport,
                    event,
                    athlete_name: &member.name,
                    athlete_id: &member.athlete_id,
                    medal: None,
                    is_team: true,
                };
                if self.push_result(&new) {
                    self.stats.team_rows += 1;
                }
            }
        }
    }
}
