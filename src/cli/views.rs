//! Compute, display, and optionally export each derived table
//!
//! Every call recomputes its table from the loaded dataset.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::pipeline::{
    aggregate_by_location, aggregate_by_time, build_heatmap, crime_types, join_income,
    rates_by_area, years, CrimeTypeFilter, Dataset, Granularity, HeatmapFilters,
    LocationBucketer, YearFilter,
};
use crate::report::{
    display_heatmap, display_location_counts, display_options, display_scatter,
    display_time_series, export_table,
};
use crate::utils::{print_count, print_success};

#[derive(Serialize)]
struct LineFilters<'a> {
    crime_type: &'a CrimeTypeFilter,
    granularity: Granularity,
}

#[derive(Serialize)]
struct ScatterFilters<'a> {
    crime_type: &'a CrimeTypeFilter,
    year: &'a YearFilter,
}

#[derive(Serialize)]
struct BarFilters<'a> {
    year: &'a YearFilter,
}

#[derive(Serialize)]
struct FilterOptions {
    crime_types: Vec<String>,
    years: Vec<i32>,
}

fn maybe_export<T: Serialize, F: Serialize>(
    data: &T,
    view: &str,
    filters: &F,
    export: Option<&Path>,
) -> Result<()> {
    if let Some(path) = export {
        export_table(data, view, filters, path)?;
        print_success(&format!("Exported to {}", path.display()));
    }
    Ok(())
}

/// Line scene: crime rate over time
pub fn show_line(
    dataset: &Dataset,
    crime_type: &CrimeTypeFilter,
    granularity: Granularity,
    export: Option<&Path>,
) -> Result<()> {
    let rows = aggregate_by_time(&dataset.crimes, &dataset.population, granularity, crime_type);
    display_time_series(&rows, granularity);
    maybe_export(
        &rows,
        "line",
        &LineFilters {
            crime_type,
            granularity,
        },
        export,
    )
}

/// Scatter scene: crime rate against median income
pub fn show_scatter(
    dataset: &Dataset,
    crime_type: &CrimeTypeFilter,
    year: &YearFilter,
    export: Option<&Path>,
) -> Result<()> {
    let rates = rates_by_area(&dataset.crimes, &dataset.population, crime_type, year);
    let points = join_income(&rates, &dataset.income);

    let unmatched = rates.len() - points.len();
    display_scatter(&points);
    if unmatched > 0 {
        print_count(
            "community area(s) without income data",
            unmatched,
            Some("(not plotted)"),
        );
    }
    maybe_export(&points, "scatter", &ScatterFilters { crime_type, year }, export)
}

/// Heatmap scene: crime rate per community-area boundary
pub fn show_heatmap(dataset: &Dataset, filters: &HeatmapFilters, export: Option<&Path>) -> Result<()> {
    let heatmap = build_heatmap(
        &dataset.crimes,
        &dataset.geo,
        &dataset.population,
        &dataset.income,
        filters,
    );
    display_heatmap(&heatmap);
    maybe_export(&heatmap, "heatmap", filters, export)
}

/// Bar scene: crime counts per location category
pub fn show_bar(
    dataset: &Dataset,
    bucketer: &LocationBucketer,
    year: &YearFilter,
    export: Option<&Path>,
) -> Result<()> {
    let counts = aggregate_by_location(&dataset.crimes, bucketer, year);
    display_location_counts(&counts);
    maybe_export(&counts, "bar", &BarFilters { year }, export)
}

/// Filter options available for the loaded crimes
pub fn show_options(dataset: &Dataset, export: Option<&Path>) -> Result<()> {
    let options = FilterOptions {
        crime_types: crime_types(&dataset.crimes),
        years: years(&dataset.crimes),
    };
    display_options(&options.crime_types, &options.years);
    maybe_export(&options, "options", &serde_json::Value::Null, export)
}
