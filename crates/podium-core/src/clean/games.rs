//! Games table cleaning and target edition detection.

use tracing::{debug, info};

use podium_model::columns::games;
use podium_model::{Result, RowSet, TargetEdition, TargetEditionOptions};
use podium_transform::{normalize_range, normalize_single};

/// Normalizes the date columns and detects the target edition.
///
/// The first row matching `target` fixes the edition id and display name.
/// Every matching row has its three dates forced to the configured literals,
/// since the source text for that edition is unreliable. Other rows with a
/// numeric year have their non-empty dates normalized against that year.
pub fn clean_games(
    games: &mut RowSet,
    target: &TargetEditionOptions,
) -> Result<Option<TargetEdition>> {
    let columns = games.columns(games::TABLE);
    let edition_idx = columns.require(games::EDITION)?;
    let id_idx = columns.require(games::EDITION_ID)?;
    let year_idx = columns.require(games::YEAR)?;
    let city_idx = columns.require(games::CITY)?;
    let start_idx = columns.require(games::START_DATE)?;
    let end_idx = columns.require(games::END_DATE)?;
    let competition_idx = columns.require(games::COMPETITION_DATE)?;

    games.pad_rows();
    let mut detected: Option<TargetEdition> = None;
    let mut normalized = 0usize;
    for row in &mut games.rows {
        let Ok(year) = row[year_idx].trim().parse::<i32>() else {
            debug!(edition_id = %row[id_idx], year = %row[year_idx], "games row without numeric year");
            continue;
        };

        if target.matches(year, &row[city_idx], &row[edition_idx]) {
            if detected.is_none() {
                let name = match row[edition_idx].trim() {
                    "" => target.edition_name.clone(),
                    name => name.to_string(),
                };
                detected = Some(TargetEdition::new(row[id_idx].trim(), name));
            }
            row[start_idx] = target.start_date.clone();
            row[end_idx] = target.end_date.clone();
            row[competition_idx] = target.competition_date.clone();
            continue;
        }

        if year == 0 {
            continue;
        }
        for idx in [start_idx, end_idx] {
            if !row[idx].is_empty() {
                row[idx] = normalize_single(&row[idx], year);
            }
        }
        if !row[competition_idx].is_empty() {
            row[competition_idx] = normalize_range(&row[competition_idx], year);
        }
        normalized += 1;
    }

    info!(
        rows = games.len(),
        normalized,
        target = detected.as_ref().map(|t| t.edition_id.as_str()).unwrap_or(""),
        "cleaned games table"
    );
    Ok(detected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> [&'static str; 7] {
        [
            "edition",
            "edition_id",
            "year",
            "city",
            "start_date",
            "end_date",
            "competition_date",
        ]
    }

    #[test]
    fn test_detects_target_and_forces_dates() {
        let mut set = RowSet::from_strs(
            &header(),
            &[
                &["2020 Summer Olympics", "61", "2020", "Tokyo", "23 July 2021", "8 August 2021", "21 July – 8 August 2021"],
                &["2024 Summer Olympics", "63", "2024", "Paris", "bad", "worse", "26 July – 11 August"],
            ],
        );
        let target = clean_games(&mut set, &TargetEditionOptions::default()).unwrap();
        assert_eq!(target, Some(TargetEdition::new("63", "2024 Summer Olympics")));
        assert_eq!(set.rows[0][4], "23-Jul-2020");
        assert_eq!(set.rows[0][5], "08-Aug-2020");
        assert_eq!(set.rows[0][6], "21-Jul-2020 to 08-Aug-2020");
        assert_eq!(set.rows[1][4], "26-Jul-2024");
        assert_eq!(set.rows[1][5], "11-Aug-2024");
        assert_eq!(set.rows[1][6], "24-Jul-2024 to 11-Aug-2024");
    }

    #[test]
    fn test_rows_without_year_are_left_alone() {
        let mut set = RowSet::from_strs(&header(), &[&["Intercalated", "5", "", "Athina", "6 April"]]);
        let target = clean_games(&mut set, &TargetEditionOptions::default()).unwrap();
        assert!(target.is_none());
        assert_eq!(set.rows[0], vec!["Intercalated", "5", "", "Athina", "6 April", "", ""]);
    }

    #[test]
    fn test_first_match_fixes_target_id() {
        let mut set = RowSet::from_strs(
            &header(),
            &[
                &["2024 Summer Olympics", "63", "2024", "Paris", "", "", ""],
                &["2024 Summer Paralympics", "64", "2024", "Paris", "", "", ""],
            ],
        );
        let target = clean_games(&mut set, &TargetEditionOptions::default()).unwrap();
        assert_eq!(target.map(|t| t.edition_id), Some("63".to_string()));
        assert_eq!(set.rows[1][4], "26-Jul-2024");
    }

    #[test]
    fn test_missing_column_is_reported() {
        let mut set = RowSet::from_strs(&["edition", "edition_id"], &[]);
        assert!(clean_games(&mut set, &TargetEditionOptions::default()).is_err());
    }
}
