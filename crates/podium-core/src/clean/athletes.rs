//! Athlete biography cleaning.

use tracing::{debug, info};

use podium_model::columns::athlete;
use podium_model::{Result, RowSet};
use podium_transform::normalize_free;

use crate::context::BirthdateIndex;
use crate::identity::IdentityIndex;

/// Indices built while cleaning the athlete table.
#[derive(Debug, Clone, Default)]
pub struct AthleteIndices {
    pub birthdates: BirthdateIndex,
    pub identities: IdentityIndex,
}

/// Pads rows, rewrites `born` into canonical form while indexing birthdates,
/// then builds the identity index from the cleaned table.
///
/// Fails with `MissingColumn` before touching any row when `athlete_id`,
/// `born`, `name` or `country_noc` is absent.
pub fn clean_athletes(athletes: &mut RowSet) -> Result<AthleteIndices> {
    let columns = athletes.columns(athlete::TABLE);
    let id_idx = columns.require(athlete::ID)?;
    let born_idx = columns.require(athlete::BORN)?;
    columns.require(athlete::NAME)?;
    columns.require(athlete::NOC)?;

    athletes.pad_rows();
    let mut birthdates = BirthdateIndex::new();
    let mut unparsed = 0usize;
    for row in &mut athletes.rows {
        let raw = std::mem::take(&mut row[born_idx]);
        let cleaned = normalize_free(&raw);
        if cleaned.is_empty() && !raw.trim().is_empty() {
            unparsed += 1;
            debug!(athlete_id = %row[id_idx], born = %raw, "unparseable birthdate");
        }
        birthdates.record(&row[id_idx], &cleaned);
        row[born_idx] = cleaned;
    }
    let indices = AthleteIndices {
        birthdates,
        identities: IdentityIndex::build(athletes)?,
    };

    info!(
        rows = athletes.len(),
        birthdates = indices.birthdates.len(),
        identities = indices.identities.len(),
        unparsed,
        "cleaned athlete table"
    );
    Ok(indices)
}
