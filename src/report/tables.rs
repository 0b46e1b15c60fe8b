//! Terminal tables for each derived dataset

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{
    CategoryCount, Granularity, Heatmap, IncomeBracket, LocationCategory, ScatterPoint,
    TimeBucketRate,
};

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn print_title(icon: &str, title: &str) {
    println!();
    println!("    {} {}", style(icon).cyan(), style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());
    println!();
}

fn print_empty() {
    println!(
        "    {}",
        style("No crimes match the selected filters").dim()
    );
}

fn rate_cell(rate: f64) -> Cell {
    Cell::new(format!("{:.2}", rate)).set_alignment(CellAlignment::Right)
}

fn bracket_color(bracket: IncomeBracket) -> Color {
    match bracket {
        IncomeBracket::Low => Color::Red,
        IncomeBracket::Medium => Color::Blue,
        IncomeBracket::High => Color::Green,
    }
}

fn category_color(category: LocationCategory) -> Color {
    match category {
        LocationCategory::Residential => Color::Magenta,
        LocationCategory::Business => Color::Blue,
        LocationCategory::Public => Color::Yellow,
        LocationCategory::Other => Color::Grey,
    }
}

/// Show the crime rate over time
pub fn display_time_series(rows: &[TimeBucketRate], granularity: Granularity) {
    let heading = match granularity {
        Granularity::Yearly => "Year",
        Granularity::Monthly => "Month",
    };
    print_title("📈", "CRIME RATE OVER TIME");

    if rows.is_empty() {
        print_empty();
        return;
    }

    let mut table = new_table(&[heading, "Crimes", "Rate per 100k"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.bucket),
            Cell::new(row.count).set_alignment(CellAlignment::Right),
            rate_cell(row.rate),
        ]);
    }
    print_indented(&table);
}

/// Show crime rate against median income, one row per community
pub fn display_scatter(points: &[ScatterPoint]) {
    print_title("💵", "CRIME RATE VS INCOME");

    if points.is_empty() {
        print_empty();
        return;
    }

    let mut table = new_table(&["Area", "Community", "Median Income", "Bracket", "Rate per 100k"]);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.area),
            Cell::new(&point.name),
            Cell::new(format!("${:.0}", point.income)).set_alignment(CellAlignment::Right),
            Cell::new(point.bracket.label()).fg(bracket_color(point.bracket)),
            rate_cell(point.rate),
        ]);
    }
    print_indented(&table);
}

/// Show the heatmap table, one row per community-area boundary
pub fn display_heatmap(heatmap: &Heatmap) {
    print_title("🗺️ ", "CRIME RATE BY COMMUNITY AREA");

    if heatmap.cells.is_empty() {
        print_empty();
        return;
    }

    let mut table = new_table(&["Area", "Community", "Rate per 100k", "Median Income"]);
    for cell in &heatmap.cells {
        let hot = heatmap.max_rate > 0.0 && cell.rate >= heatmap.max_rate * 0.75;
        let income = cell
            .income
            .map(|i| format!("${:.0}", i))
            .unwrap_or_else(|| "N/A".to_string());
        table.add_row(vec![
            Cell::new(&cell.area),
            Cell::new(&cell.community),
            rate_cell(cell.rate).fg(if hot { Color::Red } else { Color::White }),
            Cell::new(income).set_alignment(CellAlignment::Right),
        ]);
    }
    print_indented(&table);
    println!(
        "    {}",
        style(format!("Colour scale: 0 to {:.2}", heatmap.max_rate)).dim()
    );
}

/// Show crime counts per location category
pub fn display_location_counts(counts: &[CategoryCount]) {
    print_title("📊", "CRIMES BY LOCATION");

    if counts.is_empty() {
        print_empty();
        return;
    }

    let mut table = new_table(&["Category", "Crimes"]);
    for entry in counts {
        table.add_row(vec![
            Cell::new(entry.category).fg(category_color(entry.category)),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
        ]);
    }
    print_indented(&table);
}

/// List the crime types and years available as filters
pub fn display_options(crime_types: &[String], years: &[i32]) {
    print_title("🔎", "FILTER OPTIONS");

    let years = years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("      {} {}", style("Years:").yellow(), years);
    println!();
    println!(
        "      {} {}",
        style("Crime types").yellow(),
        style(format!("({})", crime_types.len())).dim()
    );
    for crime_type in crime_types {
        println!("        {} {}", style("•").dim(), crime_type);
    }
}
