//! Secondary athlete pass: match or create, backfill, individual event rows.

use tracing::debug;

use podium_model::columns::secondary::athletes;
use podium_model::{Result, RowSet, cell};
use podium_transform::{normalize_free, normalize_secondary_name, parse_serialized_list};

use super::rows::NewResult;
use super::{Integration, ResolvedAthlete};

/// Positions in the secondary athlete table.
#[derive(Debug, Clone, Copy)]
struct SecondaryAthleteColumns {
    code: usize,
    name: usize,
    gender: usize,
    noc: usize,
    birth_date: usize,
    events: usize,
    name_tv: Option<usize>,
    country: Option<usize>,
    height: Option<usize>,
    weight: Option<usize>,
}

impl SecondaryAthleteColumns {
    fn resolve(table: &RowSet) -> Result<Self> {
        let columns = table.columns(athletes::TABLE);
        Ok(Self {
            code: columns.require(athletes::CODE)?,
            name: columns.require(athletes::NAME)?,
            gender: columns.require(athletes::GENDER)?,
            noc: columns.require(athletes::COUNTRY_CODE)?,
            birth_date: columns.require(athletes::BIRTH_DATE)?,
            events: columns.require(athletes::EVENTS)?,
            name_tv: columns.optional(athletes::NAME_TV),
            country: columns.optional(athletes::COUNTRY),
            height: columns.optional(athletes::HEIGHT),
            weight: columns.optional(athletes::WEIGHT),
        })
    }
}

/// One secondary athlete record, trimmed and normalized.
#[derive(Debug)]
struct SecondaryAthlete<'r> {
    code: &'r str,
    name: String,
    gender: &'r str,
    noc: String,
    country: &'r str,
    height: &'r str,
    weight: &'r str,
    birth: &'r str,
    events: &'r str,
}

impl<'r> SecondaryAthlete<'r> {
    fn read(row: &'r [String], columns: &SecondaryAthleteColumns) -> Self {
        let optional = |idx: Option<usize>| idx.map(|idx| cell(row, idx).trim()).unwrap_or("");
        Self {
            code: cell(row, columns.code).trim(),
            name: normalize_secondary_name(cell(row, columns.name), optional(columns.name_tv)),
            gender: cell(row, columns.gender).trim(),
            noc: cell(row, columns.noc).trim().to_uppercase(),
            country: optional(columns.country),
            height: known_measurement(optional(columns.height)),
            weight: known_measurement(optional(columns.weight)),
            birth: cell(row, columns.birth_date).trim(),
            events: cell(row, columns.events).trim(),
        }
    }
}

/// `"0"` marks an unknown height or weight.
fn known_measurement(value: &str) -> &str {
    if value == "0" { "" } else { value }
}

/// Coarse sex from the secondary gender text.
fn sex_from_gender(gender: &str) -> &'static str {
    if gender.to_lowercase().starts_with('m') {
        "Male"
    } else {
        "Female"
    }
}

/// Primary tables carry country display names with a leading space.
fn country_display(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!(" {name}")
    }
}

impl Integration<'_> {
    pub(super) fn integrate_athletes(&mut self, table: &RowSet) {
        if table.headers.is_empty() {
            debug!("no secondary athlete table");
            return;
        }
        let columns = match SecondaryAthleteColumns::resolve(table) {
            Ok(columns) => columns,
            Err(error) => {
                self.warn_pass_disabled(&error);
                return;
            }
        };

        for row in &table.rows {
            let record = SecondaryAthlete::read(row, &columns);
            if record.code.is_empty() || record.name.is_empty() || record.noc.is_empty() {
                debug!(code = record.code, "secondary athlete without code, name or NOC");
                self.stats.skipped_records += 1;
                continue;
            }

            let existing = self
                .context
                .identities
                .resolve(&record.name, &record.noc)
                .map(str::to_string);
            let athlete_id = match existing {
                Some(athlete_id) => {
                    self.stats.athletes_matched += 1;
                    if self.backfill(&athlete_id, &record) {
                        self.stats.athletes_backfilled += 1;
                    }
                    athlete_id
                }
                None => self.create_athlete(&record),
            };
            self.by_code.insert(
                record.code.to_string(),
                ResolvedAthlete {
                    athlete_id: athlete_id.clone(),
                    name: record.name.clone(),
                },
            );

            for event in parse_serialized_list(record.events).items {
                let sport = self.lookups.sport(&event).to_string();
                let new = NewResult {
                    noc: &record.noc,
                    sport: &sport,
                    event: &event,
                    athlete_name: &record.name,
                    athlete_id: &athlete_id,
                    medal: self.lookups.medal(record.code, &event),
                    is_team: self.lookups.is_team_event(&event),
                };
                if self.push_result(&new) {
                    self.stats.individual_rows += 1;
                }
            }
        }
    }

    fn create_athlete(&mut self, record: &SecondaryAthlete<'_>) -> String {
        let columns = self.athlete_columns;
        let athlete_id = self.athlete_ids.allocate();
        let mut row = self.athletes.blank_row();
        row[columns.id] = athlete_id.clone();
        row[columns.name] = record.name.clone();
        row[columns.sex] = sex_from_gender(record.gender).to_string();
        row[columns.born] = normalize_free(record.birth);
        row[columns.noc] = record.noc.clone();
        if let Some(idx) = columns.height {
            row[idx] = record.height.to_string();
        }
        if let Some(idx) = columns.weight {
            row[idx] = record.weight.to_string();
        }
        if let Some(idx) = columns.country {
            row[idx] = country_display(record.country);
        }
        debug!(athlete_id = %athlete_id, name = %record.name, "created athlete");
        self.push_athlete(row);
        athlete_id
    }

    /// Fills empty fields of an existing athlete. Non-empty fields are never
    /// overwritten. Returns true when anything changed.
    fn backfill(&mut self, athlete_id: &str, record: &SecondaryAthlete<'_>) -> bool {
        let Some(&row_idx) = self.athlete_rows.get(athlete_id) else {
            return false;
        };
        let columns = self.athlete_columns;
        let row = &mut self.athletes.rows[row_idx];
        let mut changed = false;

        if row[columns.born].trim().is_empty() && !record.birth.is_empty() {
            let cleaned = normalize_free(record.birth);
            if !cleaned.is_empty() {
                self.context.birthdates.record(athlete_id, &cleaned);
                row[columns.born] = cleaned;
                changed = true;
            }
        }
        let fills = [
            (columns.height, record.height.to_string()),
            (columns.weight, record.weight.to_string()),
            (columns.country, country_display(record.country)),
        ];
        for (idx, value) in fills {
            if let Some(idx) = idx
                && row[idx].trim().is_empty()
                && !value.is_empty()
            {
                row[idx] = value;
                changed = true;
            }
        }
        changed
    }
}
