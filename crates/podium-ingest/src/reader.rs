//! CSV reading into row-sets.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use podium_model::RowSet;

use crate::error::{IngestError, Result};

/// Reads a comma-delimited file into a row-set.
///
/// The first record is the header, with a UTF-8 byte order mark stripped from
/// its first cell. Cells are kept verbatim and rows are not padded, so ragged
/// files survive unchanged until a stage pads them.
pub fn read_row_set(path: &Path) -> Result<RowSet> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.map_err(|source| IngestError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?;
            record
                .iter()
                .enumerate()
                .map(|(idx, value)| {
                    if idx == 0 {
                        value.trim_start_matches('\u{feff}').to_string()
                    } else {
                        value.to_string()
                    }
                })
                .collect()
        }
        None => return Ok(RowSet::default()),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "read row-set");
    Ok(RowSet::new(headers, rows))
}

/// Reads a row-set, degrading to an empty one when the file is absent or
/// unreadable. Downstream stages treat an empty row-set as "no data".
pub fn read_row_set_or_empty(path: &Path) -> RowSet {
    match read_row_set(path) {
        Ok(set) => set,
        Err(error) if error.is_not_found() => {
            warn!(path = %path.display(), "input file not found, using empty table");
            RowSet::default()
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "input file unreadable, using empty table");
            RowSet::default()
        }
    }
}
