//! Derived `age` column on the result table.

use std::collections::HashMap;

use tracing::{debug, info};

use podium_model::columns::{games, result};
use podium_model::{Result, RowSet, cell};
use podium_transform::age;

use crate::context::BirthdateIndex;

/// Edition id to event window, built once from the games table.
///
/// The window prefers `competition_date`, then `"start to end"`, then
/// whichever single date is present. Editions with no usable date are absent.
#[derive(Debug, Clone, Default)]
pub struct EditionWindows {
    windows: HashMap<String, String>,
}

impl EditionWindows {
    pub fn build(games_table: &RowSet) -> Self {
        let mut windows = HashMap::new();
        let columns = games_table.columns(games::TABLE);
        let Some(id_idx) = columns.optional(games::EDITION_ID) else {
            return Self { windows };
        };
        let field = |row: &[String], name: &str| {
            columns
                .optional(name)
                .map(|idx| cell(row, idx).trim().to_string())
                .unwrap_or_default()
        };

        for row in &games_table.rows {
            let edition_id = cell(row, id_idx).trim();
            if edition_id.is_empty() {
                continue;
            }
            let competition = field(row, games::COMPETITION_DATE);
            let start = field(row, games::START_DATE);
            let end = field(row, games::END_DATE);
            let window = match (competition.is_empty(), start.is_empty(), end.is_empty()) {
                (false, _, _) => competition,
                (true, false, false) => format!("{start} to {end}"),
                (true, false, true) => start,
                (true, true, false) => end,
                (true, true, true) => continue,
            };
            windows.entry(edition_id.to_string()).or_insert(window);
        }
        Self { windows }
    }

    pub fn get(&self, edition_id: &str) -> Option<&str> {
        self.windows.get(edition_id.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Appends an `age` column to `results`, or recomputes an existing one.
///
/// Returns the number of rows that received a non-empty age. Fails with
/// `MissingColumn`, leaving the table unchanged, when `edition_id` or
/// `athlete_id` is absent.
pub fn add_age_column(
    results: &mut RowSet,
    birthdates: &BirthdateIndex,
    games_table: &RowSet,
) -> Result<usize> {
    let columns = results.columns(result::TABLE);
    let edition_idx = columns.require(result::EDITION_ID)?;
    let athlete_idx = columns.require(result::ATHLETE_ID)?;
    let existing = columns.optional(result::AGE);

    let windows = EditionWindows::build(games_table);
    debug!(editions = windows.len(), "built edition windows");

    let age_idx = match existing {
        Some(idx) => idx,
        None => {
            results.headers.push(result::AGE.to_string());
            results.headers.len() - 1
        }
    };
    results.pad_rows();

    let mut computed = 0usize;
    for row in &mut results.rows {
        let value = match (
            birthdates.get(cell(row, athlete_idx)),
            windows.get(cell(row, edition_idx)),
        ) {
            (Some(birth), Some(window)) => age(birth, window),
            _ => String::new(),
        };
        if !value.is_empty() {
            computed += 1;
        }
        row[age_idx] = value;
    }

    info!(
        rows = results.len(),
        computed,
        recomputed = existing.is_some(),
        "added age column"
    );
    Ok(computed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games_table() -> RowSet {
        RowSet::from_strs(
            &["edition", "edition_id", "start_date", "end_date", "competition_date"],
            &[
                &["2024 Summer Olympics", "61", "26-Jul-2024", "11-Aug-2024", "24-Jul-2024 to 11-Aug-2024"],
                &["1896 Summer Olympics", "1", "06-Apr-1896", "15-Apr-1896", ""],
                &["1900 Summer Olympics", "2", "14-May-1900", "", ""],
                &["Unknown", "3", "", "", ""],
            ],
        )
    }

    #[test]
    fn test_window_preference() {
        let windows = EditionWindows::build(&games_table());
        assert_eq!(windows.get("61"), Some("24-Jul-2024 to 11-Aug-2024"));
        assert_eq!(windows.get("1"), Some("06-Apr-1896 to 15-Apr-1896"));
        assert_eq!(windows.get("2"), Some("14-May-1900"));
        assert_eq!(windows.get("3"), None);
    }

    #[test]
    fn test_appends_then_recomputes() {
        let mut results = RowSet::from_strs(
            &["edition_id", "athlete_id"],
            &[&["61", "1"], &["61", "2"], &["9", "1"]],
        );
        let mut birthdates = BirthdateIndex::new();
        birthdates.record("1", "01-Aug-2000");

        let computed = add_age_column(&mut results, &birthdates, &games_table()).unwrap();
        assert_eq!(computed, 1);
        assert_eq!(results.headers, vec!["edition_id", "athlete_id", "age"]);
        assert_eq!(results.rows[0][2], "24");
        assert_eq!(results.rows[1][2], "");
        assert_eq!(results.rows[2][2], "");

        let before = results.clone();
        add_age_column(&mut results, &birthdates, &games_table()).unwrap();
        assert_eq!(results, before);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut results = RowSet::from_strs(&["edition_id"], &[&["61"]]);
        let before = results.clone();
        assert!(add_age_column(&mut results, &BirthdateIndex::new(), &games_table()).is_err());
        assert_eq!(results, before);
    }
}
