//! Table rendering of command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use atlas_model::{AlignedTable, CorrelationBand, IndicatorKey, IndicatorSpec};
use atlas_transform::format_value;

use crate::types::{IndicatorReport, InsightsReport, MapReport, SeriesReport};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn catalog_table(catalog: &[IndicatorSpec]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Backend prefix"),
        header_cell("Title"),
        header_cell("Scale"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for spec in catalog {
        table.add_row(vec![
            Cell::new(spec.code).add_attribute(Attribute::Bold),
            dim_cell(spec.backend_prefix),
            Cell::new(spec.chart_title),
            Cell::new(format!("1/{}", spec.chart_divisor)),
        ]);
    }
    table
}

/// One column per table column, values formatted with `format_key`'s rules,
/// or with each column's own rules when `format_key` is `None`.
pub fn rows_table(rows: &AlignedTable, format_key: Option<&str>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Year")];
    header.extend(rows.columns().iter().map(|column| header_cell(column)));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=rows.columns().len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows.rows() {
        let mut cells = vec![Cell::new(row.year)];
        for (column, value) in rows.columns().iter().zip(row.values()) {
            let key = format_key.unwrap_or(column);
            cells.push(match value {
                Some(_) => Cell::new(format_value(key, *value)),
                None => dim_cell("-"),
            });
        }
        table.add_row(cells);
    }
    table
}

pub fn print_series(report: &SeriesReport) {
    println!("{} - {}", report.title, report.primary);
    if report.rows.is_empty() {
        println!("No data.");
        return;
    }
    println!("Years: {}-{}", report.year_domain.0, report.year_domain.1);
    println!("{}", rows_table(&report.rows, Some(report.indicator.as_str())));
}

pub fn print_indicators(report: &IndicatorReport) {
    println!("{}: {}", report.country, report.indicators.join(" vs "));
    if report.rows.is_empty() {
        println!("No data.");
    } else {
        println!("{}", rows_table(&report.rows, None));
    }
    if let Some(correlation) = &report.correlation {
        println!("{}", correlation_line(correlation.coefficient, correlation.sample_size));
    }
}

/// Coefficient at two decimals plus its band, e.g. `r = -0.87 (n = 12), Strong Negative Correlation`.
pub fn correlation_line(coefficient: Option<f64>, sample_size: usize) -> String {
    match coefficient {
        Some(r) => format!(
            "r = {r:.2} (n = {sample_size}), {}",
            CorrelationBand::classify(r).label()
        ),
        None => "r = n/a (not enough data)".to_string(),
    }
}

pub fn print_latest(report: &MapReport) {
    println!("{}", report.label);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Country"),
        header_cell("Value"),
        header_cell("Legend"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &report.entries {
        let point = &entry.point;
        table.add_row(vec![
            dim_cell(point.x),
            Cell::new(&point.country_original),
            match point.value {
                Some(value) => Cell::new(format_number(value)),
                None => dim_cell("-"),
            },
            match entry.legend_label {
                Some(label) => Cell::new(label).fg(bucket_color(entry.legend_bucket)),
                None => dim_cell("no data"),
            },
        ]);
    }
    println!("{table}");
}

pub fn print_insights(report: &InsightsReport) {
    println!("{} ({})", report.country, report.indicator);
    if report.available.is_empty() {
        println!("Available indicators: none");
    } else {
        let codes: Vec<&str> = report.available.iter().map(IndicatorKey::as_str).collect();
        println!("Available indicators: {}", codes.join(", "));
    }
    if report.correlations.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dimension"), header_cell("Correlation")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in &report.correlations {
        let color = if summary.value < 0.0 {
            Color::Red
        } else {
            Color::Green
        };
        table.add_row(vec![
            Cell::new(summary.label),
            Cell::new(format!("{:.3}", summary.value)).fg(color),
        ]);
    }
    println!("{table}");
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn bucket_color(bucket: Option<usize>) -> Color {
    match bucket {
        Some(0) => Color::Green,
        Some(1 | 2) => Color::DarkGreen,
        Some(3) => Color::Yellow,
        Some(4) => Color::DarkYellow,
        _ => Color::Red,
    }
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
