//! CSV writing of row-sets.

use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use podium_model::RowSet;

use crate::error::{IngestError, Result};

/// Writes the header and rows in stored order, creating parent directories.
///
/// No cell is transformed; an empty row-set produces an empty file.
pub fn write_row_set(path: &Path, set: &RowSet) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvWrite {
            path: path.to_path_buf(),
            source,
        })?;
    if !set.headers.is_empty() {
        writer
            .write_record(&set.headers)
            .map_err(|source| IngestError::CsvWrite {
                path: path.to_path_buf(),
                source,
            })?;
    }
    for row in &set.rows {
        writer
            .write_record(row)
            .map_err(|source| IngestError::CsvWrite {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = set.len(), "wrote row-set");
    Ok(())
}
