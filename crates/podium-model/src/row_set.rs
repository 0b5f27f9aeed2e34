//! In-memory tabular data exchanged between pipeline stages.

use std::collections::HashMap;

use crate::error::{ModelError, Result};

/// An ordered header plus rows of string cells.
///
/// Rows may be shorter than the header when read from disk; stages call
/// [`RowSet::pad_rows`] before indexing into them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a header-only row-set.
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a row-set from string slices, mostly for fixtures.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|value| (*value).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|value| (*value).to_string()).collect())
                .collect(),
        }
    }

    /// True when the row-set has neither a header nor rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Builds a name lookup for this row-set, labelled with `table` for errors.
    pub fn columns(&self, table: &str) -> ColumnIndex {
        ColumnIndex::new(table, &self.headers)
    }

    /// Pads every row shorter than the header with empty cells.
    pub fn pad_rows(&mut self) {
        let width = self.headers.len();
        for row in &mut self.rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }
    }

    /// Creates an empty row matching the header width.
    pub fn blank_row(&self) -> Vec<String> {
        vec![String::new(); self.headers.len()]
    }

    /// Iterates the values of one column, yielding `""` for short rows.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| cell(row, idx))
    }
}

/// Returns the cell at `idx`, or `""` when the row is too short.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Header name to position lookup, built once per table.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    table: String,
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new(table: &str, headers: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            // First occurrence wins, matching a left-to-right header scan.
            positions.entry(header.clone()).or_insert(idx);
        }
        Self {
            table: table.to_string(),
            positions,
        }
    }

    /// Position of a column that must exist.
    pub fn require(&self, column: &str) -> Result<usize> {
        self.positions
            .get(column)
            .copied()
            .ok_or_else(|| ModelError::MissingColumn {
                table: self.table.clone(),
                column: column.to_string(),
            })
    }

    /// Position of a column that may be absent.
    pub fn optional(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_rows_extends_short_rows() {
        let mut set = RowSet::from_strs(&["a", "b", "c"], &[&["1"], &["1", "2", "3"]]);
        set.pad_rows();
        assert_eq!(set.rows[0], vec!["1", "", ""]);
        assert_eq!(set.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_require_reports_table_and_column() {
        let set = RowSet::from_strs(&["a"], &[]);
        let columns = set.columns("games");
        assert_eq!(columns.require("a"), Ok(0));
        let error = columns.require("year").unwrap_err();
        assert_eq!(
            error,
            ModelError::MissingColumn {
                table: "games".to_string(),
                column: "year".to_string(),
            }
        );
        assert_eq!(error.to_string(), "games: missing required column 'year'");
    }

    #[test]
    fn test_cell_tolerates_short_rows() {
        let row = vec!["x".to_string()];
        assert_eq!(cell(&row, 0), "x");
        assert_eq!(cell(&row, 3), "");
    }

    #[test]
    fn test_empty_row_set() {
        let set = RowSet::default();
        assert!(set.is_empty());
        assert!(!RowSet::with_headers(["noc"]).is_empty());
    }
}
