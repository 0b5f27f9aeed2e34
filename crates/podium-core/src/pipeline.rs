//! Fixed-order reconciliation pipeline.
//!
//! Every stage runs in its own span. A stage that fails on a missing column
//! logs a warning, records it in [`ReconcileOutput::warnings`], and leaves its
//! input unchanged for the stages after it.

use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use podium_model::{ModelError, ReconcileOptions, RowSet, TargetEdition, columns};

use crate::age::add_age_column;
use crate::clean::{clean_athletes, clean_games, merge_countries};
use crate::context::ReconcileContext;
use crate::integrate::{IntegrationStats, SecondarySources, integrate};
use crate::tally::tally;

/// Raw tables handed to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ReconcileInputs {
    pub athletes: RowSet,
    pub results: RowSet,
    pub countries: RowSet,
    pub games: RowSet,
    pub secondary: SecondarySources,
}

/// Output tables plus what the run learned about its inputs.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutput {
    pub athletes: RowSet,
    pub results: RowSet,
    pub countries: RowSet,
    pub games: RowSet,
    pub tally: RowSet,
    pub target: Option<TargetEdition>,
    pub stats: IntegrationStats,
    /// Result rows that received a non-empty age.
    pub ages_computed: usize,
    /// Degraded stages and disabled passes, in the order they occurred.
    pub warnings: Vec<String>,
}

impl ReconcileOutput {
    /// Row count for each output table, in output order.
    pub fn row_counts(&self) -> [(&'static str, usize); 5] {
        [
            ("athletes", self.athletes.len()),
            ("results", self.results.len()),
            ("countries", self.countries.len()),
            ("games", self.games.len()),
            ("tally", self.tally.len()),
        ]
    }
}

fn degrade(stage: &str, error: &ModelError, warnings: &mut Vec<String>) {
    warn!(stage, %error, "stage skipped, input left unchanged");
    warnings.push(format!("{stage}: {error}"));
}

/// Runs clean athletes, clean games, merge countries, integrate, add ages and
/// tally, in that order. Never fails; degraded stages are reported in the
/// output's warnings.
pub fn run_pipeline(inputs: ReconcileInputs, options: &ReconcileOptions) -> ReconcileOutput {
    let ReconcileInputs {
        mut athletes,
        mut results,
        countries,
        mut games,
        secondary,
    } = inputs;
    let pipeline_span = info_span!("reconcile");
    let _pipeline_guard = pipeline_span.enter();
    let pipeline_start = Instant::now();

    let mut context = ReconcileContext::new(options.clone());
    let mut warnings = Vec::new();

    info_span!("clean_athletes").in_scope(|| {
        let start = Instant::now();
        match clean_athletes(&mut athletes) {
            Ok(indices) => {
                context.birthdates = indices.birthdates;
                context.identities = indices.identities;
            }
            Err(error) => degrade("clean_athletes", &error, &mut warnings),
        }
        debug!(duration_ms = start.elapsed().as_millis(), "clean athletes complete");
    });

    info_span!("clean_games").in_scope(|| {
        let start = Instant::now();
        match clean_games(&mut games, &context.options.target) {
            Ok(target) => context.target = target,
            Err(error) => degrade("clean_games", &error, &mut warnings),
        }
        debug!(duration_ms = start.elapsed().as_millis(), "clean games complete");
    });

    let countries = info_span!("merge_countries").in_scope(|| {
        match merge_countries(&countries, &secondary.nocs) {
            Ok(merged) => merged,
            Err(error) => {
                degrade("merge_countries", &error, &mut warnings);
                countries
            }
        }
    });

    let mut stats = IntegrationStats::default();
    match context.target.clone() {
        Some(target) => {
            let start = Instant::now();
            match integrate(&mut athletes, &mut results, &secondary, &target, &mut context) {
                Ok(report) => {
                    stats = report.stats;
                    warnings.extend(report.warnings);
                }
                Err(error) => degrade("integrate", &error, &mut warnings),
            }
            debug!(duration_ms = start.elapsed().as_millis(), "integration complete");
        }
        None => {
            let message = "integrate: no target edition detected, secondary source ignored";
            warn!("{message}");
            warnings.push(message.to_string());
        }
    }

    let ages_computed = info_span!("add_age_column").in_scope(|| {
        match add_age_column(&mut results, &context.birthdates, &games) {
            Ok(computed) => computed,
            Err(error) => {
                degrade("add_age_column", &error, &mut warnings);
                0
            }
        }
    });

    let tally = info_span!("tally").in_scope(|| {
        match tally(&results, &countries, &games, context.target_edition_id()) {
            Ok(tally) => tally,
            Err(error) => {
                degrade("tally", &error, &mut warnings);
                RowSet::with_headers(columns::tally::HEADER)
            }
        }
    });

    info!(
        athletes = athletes.len(),
        results = results.len(),
        countries = countries.len(),
        tally_rows = tally.len(),
        rows_added = stats.rows_added(),
        warnings = warnings.len(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "reconciliation complete"
    );

    ReconcileOutput {
        athletes,
        results,
        countries,
        games,
        tally,
        target: context.target,
        stats,
        ages_computed,
        warnings,
    }
}
