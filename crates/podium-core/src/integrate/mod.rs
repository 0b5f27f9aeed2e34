//! Merges the secondary source into the primary athlete and result tables.
//!
//! Three passes share one state:
//!
//! 1. secondary athletes: match by identity key or create, backfill empty
//!    fields, then write one row per listed event
//! 2. team rosters: one medal-less team row per resolved member and event
//! 3. medallists: attach the medal to an existing medal-less row for the
//!    `(athlete, event)` pair, or write a medal-only row
//!
//! All passes consult one ledger of `(athlete id, event)` pairs seeded from
//! the target edition rows already present, so re-running on merged output
//! adds nothing.

mod athletes;
mod medals;
mod rows;
mod sources;
mod teams;

use std::collections::HashMap;

use tracing::{info, info_span, warn};

use podium_model::{ModelError, Result, RowSet, TargetEdition, cell};

use crate::context::ReconcileContext;
use crate::ids::IdAllocator;

use self::rows::{AthleteColumns, EventLedger, NewResult, ResultColumns};
use self::sources::SecondaryLookups;

pub use self::sources::SecondarySources;

/// Counters describing one integration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrationStats {
    pub athletes_matched: usize,
    pub athletes_created: usize,
    pub athletes_backfilled: usize,
    pub individual_rows: usize,
    pub team_rows: usize,
    pub medal_only_rows: usize,
    /// Medals written onto rows synthesized by an earlier pass or run.
    pub medals_attached: usize,
    /// Secondary records skipped for missing fields or unresolved athletes.
    pub skipped_records: usize,
}

impl IntegrationStats {
    pub fn rows_added(&self) -> usize {
        self.individual_rows + self.team_rows + self.medal_only_rows
    }
}

/// Statistics plus any degraded-input warnings.
#[derive(Debug, Clone, Default)]
pub struct IntegrationReport {
    pub stats: IntegrationStats,
    pub warnings: Vec<String>,
}

/// Integrates the secondary source for `target`.
///
/// Fails with `MissingColumn`, leaving both tables unchanged, when the athlete
/// or result table lacks a required column. Missing columns in secondary
/// tables only disable the pass that needs them and are listed in the
/// report's warnings.
pub fn integrate(
    athletes: &mut RowSet,
    results: &mut RowSet,
    sources: &SecondarySources,
    target: &TargetEdition,
    context: &mut ReconcileContext,
) -> Result<IntegrationReport> {
    let span = info_span!("integrate", edition_id = %target.edition_id);
    let _guard = span.enter();

    let athlete_columns = AthleteColumns::resolve(athletes)?;
    let result_columns = ResultColumns::resolve(results)?;
    athletes.pad_rows();
    results.pad_rows();

    let mut warnings = Vec::new();
    let lookups = SecondaryLookups::build(sources, &mut warnings);
    let mut state = Integration::new(
        athletes,
        results,
        athlete_columns,
        result_columns,
        target,
        context,
        lookups,
    );
    state.warnings = warnings;

    state.integrate_athletes(&sources.athletes);
    state.integrate_teams(&sources.teams);
    state.integrate_medallists(&sources.medallists);

    let stats = state.stats;
    info!(
        matched = stats.athletes_matched,
        created = stats.athletes_created,
        backfilled = stats.athletes_backfilled,
        individual = stats.individual_rows,
        team = stats.team_rows,
        medal_only = stats.medal_only_rows,
        medals_attached = stats.medals_attached,
        skipped = stats.skipped_records,
        "integrated secondary source"
    );
    Ok(IntegrationReport {
        stats,
        warnings: state.warnings,
    })
}

/// An athlete resolved during this run, keyed by secondary-source code.
#[derive(Debug, Clone)]
struct ResolvedAthlete {
    athlete_id: String,
    name: String,
}

/// Mutable state shared by the three passes.
struct Integration<'a> {
    athletes: &'a mut RowSet,
    results: &'a mut RowSet,
    athlete_columns: AthleteColumns,
    result_columns: ResultColumns,
    target: &'a TargetEdition,
    context: &'a mut ReconcileContext,
    lookups: SecondaryLookups,
    athlete_ids: IdAllocator,
    result_ids: IdAllocator,
    /// Athlete id to row position in the athlete table.
    athlete_rows: HashMap<String, usize>,
    by_code: HashMap<String, ResolvedAthlete>,
    ledger: EventLedger,
    stats: IntegrationStats,
    warnings: Vec<String>,
}

impl<'a> Integration<'a> {
    fn new(
        athletes: &'a mut RowSet,
        results: &'a mut RowSet,
        athlete_columns: AthleteColumns,
        result_columns: ResultColumns,
        target: &'a TargetEdition,
        context: &'a mut ReconcileContext,
        lookups: SecondaryLookups,
    ) -> Self {
        let athlete_ids = IdAllocator::seed(athletes.column_values(athlete_columns.id));
        let result_ids = IdAllocator::seed(results.column_values(result_columns.result_id));
        let mut athlete_rows = HashMap::with_capacity(athletes.len());
        for (idx, row) in athletes.rows.iter().enumerate() {
            let id = cell(row, athlete_columns.id).trim();
            if !id.is_empty() {
                athlete_rows.insert(id.to_string(), idx);
            }
        }
        let ledger = EventLedger::seed(results, &result_columns, &target.edition_id);
        Self {
            athletes,
            results,
            athlete_columns,
            result_columns,
            target,
            context,
            lookups,
            athlete_ids,
            result_ids,
            athlete_rows,
            by_code: HashMap::new(),
            ledger,
            stats: IntegrationStats::default(),
            warnings: Vec::new(),
        }
    }

    /// Appends a result row unless the `(athlete, event)` pair already exists.
    fn push_result(&mut self, new: &NewResult<'_>) -> bool {
        if self.ledger.contains(new.athlete_id, new.event) {
            return false;
        }
        let row = new.to_row(
            self.results.width(),
            &self.result_columns,
            self.target,
            self.result_ids.allocate(),
        );
        let idx = self.results.rows.len();
        self.results.rows.push(row);
        self.ledger.record(new.athlete_id, new.event, idx);
        true
    }

    /// Appends an athlete row and registers it in every index.
    fn push_athlete(&mut self, row: Vec<String>) {
        let columns = self.athlete_columns;
        let id = row[columns.id].clone();
        self.context
            .identities
            .insert(&row[columns.name], &row[columns.noc], &id);
        self.context.birthdates.record(&id, &row[columns.born]);
        self.athlete_rows.insert(id, self.athletes.rows.len());
        self.athletes.rows.push(row);
        self.stats.athletes_created += 1;
    }

    /// Resolves a secondary code first, then the identity key.
    fn resolve(&self, code: &str, name: &str, noc: &str) -> Option<ResolvedAthlete> {
        if let Some(found) = self.by_code.get(code) {
            return Some(found.clone());
        }
        self.context
            .identities
            .resolve(name, noc)
            .map(|athlete_id| ResolvedAthlete {
                athlete_id: athlete_id.to_string(),
                name: name.to_string(),
            })
    }

    fn warn_pass_disabled(&mut self, error: &ModelError) {
        warn!(%error, "integration pass skipped");
        self.warnings.push(error.to_string());
    }
}
