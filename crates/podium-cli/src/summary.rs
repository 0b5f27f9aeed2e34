use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use podium_core::IntegrationStats;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_dir.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    match &result.target {
        Some(target) => println!("Target edition: {} ({})", target.name, target.edition_id),
        None => println!("Target edition: not detected"),
    }
    println!("{}", table_summary(result));
    println!("{}", integration_summary(&result.stats, result.ages_computed));
    if !result.warnings.is_empty() {
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  - {warning}");
        }
    }
}

/// Output tables with row counts and destinations.
pub fn table_summary(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in &result.tables {
        let file_cell = match &summary.path {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(summary.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.rows),
            file_cell,
        ]);
    }
    table
}

/// Integration counters, one per row.
pub fn integration_summary(stats: &IntegrationStats, ages_computed: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Integration"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Athletes matched", stats.athletes_matched),
        ("Athletes created", stats.athletes_created),
        ("Athletes backfilled", stats.athletes_backfilled),
        ("Individual rows", stats.individual_rows),
        ("Team rows", stats.team_rows),
        ("Medal-only rows", stats.medal_only_rows),
        ("Medals attached", stats.medals_attached),
        ("Skipped records", stats.skipped_records),
        ("Ages computed", ages_computed),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), count_cell(count)]);
    }
    table.add_row(vec![
        Cell::new("Rows added")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.rows_added()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
