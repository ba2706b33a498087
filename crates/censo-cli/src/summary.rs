use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use censo_treatment::{CensorshipSummary, ColumnCensorship, TreatmentEvent};

use crate::cli::ReportFormatArg;
use crate::commands::CommandOutcome;

pub fn print_diagnosis(summary: &CensorshipSummary, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        ReportFormatArg::Table => {
            println!("Rows: {}", summary.rows());
            if summary.is_empty() {
                println!("No -6 or -8 codes found in numeric columns.");
                return Ok(());
            }
            println!("{}", diagnosis_table(summary));
        }
    }
    Ok(())
}

/// Diagnostic table with one row per censored column and a total row.
pub fn diagnosis_table(summary: &CensorshipSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("-6"),
        header_cell("% -6"),
        header_cell("-8"),
        header_cell("% -8"),
        header_cell("Special"),
        header_cell("% Special"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for entry in summary.iter() {
        table.add_row(diagnosis_row(entry));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(summary.total_special()).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn diagnosis_row(entry: &ColumnCensorship) -> Vec<Cell> {
    vec![
        Cell::new(&entry.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        count_cell(entry.not_applicable, Color::Yellow),
        pct_cell(entry.not_applicable_pct),
        count_cell(entry.confidential, Color::Red),
        pct_cell(entry.confidential_pct),
        count_cell(entry.special, Color::Magenta),
        pct_cell(entry.special_pct),
    ]
}

pub fn print_outcome(outcome: &CommandOutcome) {
    println!("Output: {}", outcome.output.display());
    println!("Rows: {}  Columns: {}", outcome.rows, outcome.columns);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Result")]);
    apply_summary_table_style(&mut table);
    for event in &outcome.events {
        match event {
            TreatmentEvent::TreatmentStarted | TreatmentEvent::TreatmentFinished => continue,
            _ => table.add_row(vec![Cell::new(event.kind()), Cell::new(event.to_string())]),
        };
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn pct_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.1}"))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
