//! Per-edition, per-country medal tally.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use podium_model::columns::{country, games, result, tally as tally_columns};
use podium_model::{Medal, Result, RowSet, cell, is_team_flag};

/// Counters for one `(edition id, NOC)` group.
#[derive(Debug, Default)]
struct Group {
    edition_id: String,
    noc: String,
    /// Edition text of the first row seen for the group.
    edition: String,
    athletes: HashSet<String>,
    gold: usize,
    silver: usize,
    bronze: usize,
}

impl Group {
    fn add_medal(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }

    fn total(&self) -> usize {
        self.gold + self.silver + self.bronze
    }
}

/// Builds a trimmed `key -> value` map from two optional columns, first
/// non-empty value wins.
fn lookup(table: &RowSet, table_name: &str, key: &str, value: &str) -> HashMap<String, String> {
    let columns = table.columns(table_name);
    let (Some(key_idx), Some(value_idx)) = (columns.optional(key), columns.optional(value)) else {
        return HashMap::new();
    };
    let mut map = HashMap::new();
    for row in &table.rows {
        let key = cell(row, key_idx).trim();
        let value = cell(row, value_idx).trim();
        if !key.is_empty() && !value.is_empty() {
            map.entry(key.to_string()).or_insert_with(|| value.to_string());
        }
    }
    map
}

/// Aggregates the merged result table into medal counts.
///
/// Rows need a non-empty edition id, NOC and athlete id. Every such row adds
/// its athlete to the group's participants; only `Gold`, `Silver` and
/// `Bronze` are counted as medals. For team rows of `target_edition_id` a
/// given `(edition id, NOC, event, medal)` is counted once, however many
/// roster members carry it. Historical team medals are counted as stored.
///
/// Results without a header produce the header-only tally. Results lacking
/// `edition_id`, `country_noc`, `athlete_id` or `medal` fail with
/// `MissingColumn`.
pub fn tally(
    results: &RowSet,
    countries: &RowSet,
    games_table: &RowSet,
    target_edition_id: Option<&str>,
) -> Result<RowSet> {
    let mut output = RowSet::with_headers(tally_columns::HEADER);
    if results.headers.is_empty() {
        debug!("no results to tally");
        return Ok(output);
    }
    let columns = results.columns(result::TABLE);
    let edition_id_idx = columns.require(result::EDITION_ID)?;
    let noc_idx = columns.require(result::NOC)?;
    let athlete_idx = columns.require(result::ATHLETE_ID)?;
    let medal_idx = columns.require(result::MEDAL)?;
    let edition_idx = columns.optional(result::EDITION);
    let event_idx = columns.optional(result::EVENT);
    let team_idx = columns.optional(result::TEAM);

    let country_names = lookup(countries, country::TABLE, country::NOC, country::COUNTRY);
    let edition_names = lookup(games_table, games::TABLE, games::EDITION_ID, games::EDITION);

    let mut groups: Vec<Group> = Vec::new();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut team_medals_seen: HashSet<(String, String, String, Medal)> = HashSet::new();
    let mut collapsed = 0usize;

    for row in &results.rows {
        let edition_id = cell(row, edition_id_idx).trim();
        let noc = cell(row, noc_idx).trim().to_uppercase();
        let athlete_id = cell(row, athlete_idx).trim();
        if edition_id.is_empty() || noc.is_empty() || athlete_id.is_empty() {
            continue;
        }

        let key = (edition_id.to_string(), noc.clone());
        let position = *positions.entry(key).or_insert_with(|| {
            groups.push(Group {
                edition_id: edition_id.to_string(),
                noc: noc.clone(),
                edition: edition_idx
                    .map(|idx| cell(row, idx).trim().to_string())
                    .unwrap_or_default(),
                ..Group::default()
            });
            groups.len() - 1
        });
        let group = &mut groups[position];
        group.athletes.insert(athlete_id.to_string());

        let Some(medal) = Medal::parse(cell(row, medal_idx)) else {
            continue;
        };
        let is_target_team_row = target_edition_id == Some(edition_id)
            && team_idx.is_some_and(|idx| is_team_flag(cell(row, idx)));
        let event = event_idx.map_or("", |idx| cell(row, idx).trim());
        if is_target_team_row && !event.is_empty() {
            let seen_key = (edition_id.to_string(), noc.clone(), event.to_string(), medal);
            if !team_medals_seen.insert(seen_key) {
                collapsed += 1;
                continue;
            }
        }
        group.add_medal(medal);
    }

    groups.sort_by_cached_key(|group| {
        (
            group.edition_id.parse::<i64>().unwrap_or(0),
            group.noc.clone(),
        )
    });

    for group in &groups {
        let edition = edition_names
            .get(&group.edition_id)
            .cloned()
            .unwrap_or_else(|| group.edition.clone());
        let country_name = country_names
            .get(&group.noc)
            .cloned()
            .unwrap_or_else(|| group.noc.clone());
        output.rows.push(vec![
            edition,
            group.edition_id.clone(),
            country_name,
            group.noc.clone(),
            group.athletes.len().to_string(),
            group.gold.to_string(),
            group.silver.to_string(),
            group.bronze.to_string(),
            group.total().to_string(),
        ]);
    }

    info!(groups = output.len(), collapsed, "built medal tally");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_give_header_only() {
        let out = tally(&RowSet::default(), &RowSet::default(), &RowSet::default(), None).unwrap();
        assert_eq!(out.headers.len(), 9);
        assert!(out.rows.is_empty());
    }

    #[test]
    fn test_missing_medal_column_is_an_error() {
        let results = RowSet::from_strs(&["edition_id", "country_noc", "athlete_id"], &[]);
        assert!(tally(&results, &RowSet::default(), &RowSet::default(), None).is_err());
    }

    #[test]
    fn test_lookup_skips_blank_values() {
        let table = RowSet::from_strs(&["noc", "country"], &[&["FRA", ""], &["FRA", "France"]]);
        let map = lookup(&table, "countries", "noc", "country");
        assert_eq!(map.get("FRA").map(String::as_str), Some("France"));
    }
}
