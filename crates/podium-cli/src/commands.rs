use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use podium_core::{ReconcileInputs, SecondarySources, run_pipeline};
use podium_ingest::{read_row_set_or_empty, write_row_set};
use podium_model::RowSet;

use crate::cli::RunArgs;
use crate::config::PodiumConfig;
use crate::types::{RunResult, TableSummary};

/// Reads every input table; absent files become empty tables.
pub fn load_inputs(input_dir: &Path, config: &PodiumConfig) -> ReconcileInputs {
    let inputs = &config.inputs;
    let read = |name: &str| read_row_set_or_empty(&input_dir.join(name));
    ReconcileInputs {
        athletes: read(&inputs.athletes),
        results: read(&inputs.results),
        countries: read(&inputs.countries),
        games: read(&inputs.games),
        secondary: SecondarySources {
            athletes: read(&inputs.secondary_athletes),
            events: read(&inputs.secondary_events),
            medallists: read(&inputs.secondary_medallists),
            teams: read(&inputs.secondary_teams),
            nocs: read(&inputs.secondary_nocs),
        },
    }
}

pub fn run_reconcile(args: &RunArgs, config: &PodiumConfig) -> Result<RunResult> {
    let input_dir = &args.input_dir;
    let output_dir = args.output_dir.clone().unwrap_or_else(|| input_dir.clone());
    let run_span = info_span!("run", input_dir = %input_dir.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let inputs = info_span!("ingest").in_scope(|| load_inputs(input_dir, config));
    let output = run_pipeline(inputs, &config.reconcile_options());

    let outputs = &config.outputs;
    let tables: [(&RowSet, &str); 5] = [
        (&output.athletes, outputs.athletes.as_str()),
        (&output.results, outputs.results.as_str()),
        (&output.countries, outputs.countries.as_str()),
        (&output.games, outputs.games.as_str()),
        (&output.tally, outputs.tally.as_str()),
    ];

    let mut summaries = Vec::with_capacity(tables.len());
    for ((name, rows), (table, file_name)) in output.row_counts().into_iter().zip(tables) {
        let path = if args.dry_run {
            None
        } else {
            let path = output_dir.join(file_name);
            write_row_set(&path, table).with_context(|| format!("write {name} table"))?;
            Some(path)
        };
        summaries.push(TableSummary { name, rows, path });
    }

    info!(
        output_dir = %output_dir.display(),
        dry_run = args.dry_run,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input_dir: input_dir.clone(),
        output_dir,
        dry_run: args.dry_run,
        target: output.target,
        stats: output.stats,
        ages_computed: output.ages_computed,
        tables: summaries,
        warnings: output.warnings,
    })
}

pub fn run_config(config: &PodiumConfig) -> Result<()> {
    let text = config.to_toml_string().context("render config")?;
    print!("{text}");
    Ok(())
}
