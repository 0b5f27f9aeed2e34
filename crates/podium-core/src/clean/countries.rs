//! Country table merge.

use std::collections::HashMap;

use tracing::{info, warn};

use podium_model::columns::{country, secondary};
use podium_model::{Result, RowSet, cell};

/// Merges the primary country table with the secondary NOC table.
///
/// Output is exactly `noc,country`, one row per uppercase NOC, sorted by
/// lowercase country name. A NOC present in both tables keeps the primary
/// name. An empty primary table still receives the secondary NOCs; a primary
/// table lacking `noc` or `country` is a `MissingColumn` error.
pub fn merge_countries(primary: &RowSet, secondary_nocs: &RowSet) -> Result<RowSet> {
    let mut merged = CountryMap::default();
    if !primary.headers.is_empty() {
        let columns = primary.columns(country::TABLE);
        let noc_idx = columns.require(country::NOC)?;
        let country_idx = columns.require(country::COUNTRY)?;
        for row in &primary.rows {
            merged.upsert(cell(row, noc_idx), cell(row, country_idx));
        }
    }
    let primary_count = merged.len();

    if !secondary_nocs.headers.is_empty() {
        let columns = secondary_nocs.columns(secondary::nocs::TABLE);
        match (
            columns.require(secondary::nocs::CODE),
            columns.require(secondary::nocs::COUNTRY),
        ) {
            (Ok(code_idx), Ok(country_idx)) => {
                for row in &secondary_nocs.rows {
                    merged.insert_missing(cell(row, code_idx), cell(row, country_idx));
                }
            }
            (Err(error), _) | (_, Err(error)) => {
                warn!(%error, "secondary NOC table ignored");
            }
        }
    }

    let added = merged.len() - primary_count;
    let mut entries = merged.into_entries();
    entries.sort_by_cached_key(|(_, name)| name.to_lowercase());

    info!(rows = entries.len(), added, "merged country table");
    Ok(RowSet::new(
        vec![country::NOC.to_string(), country::COUNTRY.to_string()],
        entries.into_iter().map(|(noc, name)| vec![noc, name]).collect(),
    ))
}

/// Insertion-ordered NOC map.
#[derive(Default)]
struct CountryMap {
    positions: HashMap<String, usize>,
    entries: Vec<(String, String)>,
}

impl CountryMap {
    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts or replaces, keeping the first position.
    fn upsert(&mut self, noc: &str, name: &str) {
        let noc = noc.trim().to_uppercase();
        if noc.is_empty() {
            return;
        }
        let name = name.trim().to_string();
        match self.positions.get(&noc) {
            Some(&idx) => self.entries[idx].1 = name,
            None => {
                self.positions.insert(noc.clone(), self.entries.len());
                self.entries.push((noc, name));
            }
        }
    }

    /// Inserts only when the NOC is new.
    fn insert_missing(&mut self, noc: &str, name: &str) {
        let key = noc.trim().to_uppercase();
        if !key.is_empty() && !self.positions.contains_key(&key) {
            self.upsert(&key, name);
        }
    }

    fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }
}
