use std::path::PathBuf;

use podium_core::IntegrationStats;
use podium_model::TargetEdition;

/// Outcome of `podium run`.
#[derive(Debug)]
pub struct RunResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub target: Option<TargetEdition>,
    pub stats: IntegrationStats,
    pub ages_computed: usize,
    pub tables: Vec<TableSummary>,
    pub warnings: Vec<String>,
}

/// One output table.
#[derive(Debug)]
pub struct TableSummary {
    pub name: &'static str,
    pub rows: usize,
    /// Written file, `None` on a dry run.
    pub path: Option<PathBuf>,
}
