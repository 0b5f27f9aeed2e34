//! Name + NOC identity keys for matching athletes across sources.

use std::collections::HashMap;

use podium_model::columns::athlete;
use podium_model::{Result, RowSet, cell};

/// Builds `lowercase(name) + "_" + uppercase(noc)` from trimmed parts.
///
/// Returns `None` when either part is blank; such athletes are never indexed.
///
/// ```
/// use podium_core::identity_key;
///
/// assert_eq!(identity_key(" Jane Doe ", "fra").as_deref(), Some("jane doe_FRA"));
/// assert_eq!(identity_key("Jane Doe", ""), None);
/// ```
pub fn identity_key(name: &str, noc: &str) -> Option<String> {
    let name = name.trim();
    let noc = noc.trim();
    if name.is_empty() || noc.is_empty() {
        return None;
    }
    Some(format!("{}_{}", name.to_lowercase(), noc.to_uppercase()))
}

/// Identity key to athlete id. At most one id per key.
#[derive(Debug, Clone, Default)]
pub struct IdentityIndex {
    keys: HashMap<String, String>,
}

impl IdentityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes an athlete table in one pass. Later rows overwrite earlier
    /// rows with the same key.
    pub fn build(athletes: &RowSet) -> Result<Self> {
        let columns = athletes.columns(athlete::TABLE);
        let id_idx = columns.require(athlete::ID)?;
        let name_idx = columns.require(athlete::NAME)?;
        let noc_idx = columns.require(athlete::NOC)?;

        let mut index = Self::new();
        for row in &athletes.rows {
            index.insert(cell(row, name_idx), cell(row, noc_idx), cell(row, id_idx));
        }
        Ok(index)
    }

    /// Registers an athlete; returns false when the name, NOC or id is blank.
    pub fn insert(&mut self, name: &str, noc: &str, athlete_id: &str) -> bool {
        let athlete_id = athlete_id.trim();
        match identity_key(name, noc) {
            Some(key) if !athlete_id.is_empty() => {
                self.keys.insert(key, athlete_id.to_string());
                true
            }
            _ => false,
        }
    }

    /// Exact key lookup.
    pub fn resolve(&self, name: &str, noc: &str) -> Option<&str> {
        let key = identity_key(name, noc)?;
        self.keys.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bio() -> RowSet {
        RowSet::from_strs(
            &["athlete_id", "name", "country_noc"],
            &[
                &["1", "Jane Doe", "FRA"],
                &["2", "John Roe", "usa"],
                &["3", "", "GBR"],
                &["4", "Jane Doe", "FRA"],
            ],
        )
    }

    #[test]
    fn test_build_last_writer_wins() {
        let index = IdentityIndex::build(&bio()).unwrap();
        assert_eq!(index.resolve("jane doe", "fra"), Some("4"));
        assert_eq!(index.resolve("John Roe", "USA"), Some("2"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_blank_names_are_not_indexed() {
        let index = IdentityIndex::build(&bio()).unwrap();
        assert_eq!(index.resolve("", "GBR"), None);
    }

    #[test]
    fn test_build_requires_columns() {
        let set = RowSet::from_strs(&["athlete_id", "name"], &[]);
        assert!(IdentityIndex::build(&set).is_err());
    }
}
