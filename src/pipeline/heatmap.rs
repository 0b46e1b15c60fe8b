//! Choropleth data: one crime rate per community-area boundary

use serde::Serialize;

use super::filter::{filter_records, CrimeTypeFilter, YearFilter};
use super::income::{IncomeIndex, IncomeLevelFilter};
use super::records::{CrimeRecord, GeoFeature, IncomeRecord, PopulationRecord};
use super::spatial::{count_by_area, rates_from_counts, AreaRates};

/// Filters applied to the heatmap
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeatmapFilters {
    pub year: YearFilter,
    pub crime_type: CrimeTypeFilter,
    pub income_level: IncomeLevelFilter,
}

/// One shaded community area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub area: String,
    pub community: String,
    pub rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
}

/// The heatmap table plus the upper bound of its colour scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub cells: Vec<HeatmapCell>,
    pub max_rate: f64,
}

/// Rates per area after the year, crime-type and income-level filters.
///
/// With an income level selected, only crimes in areas whose income falls in
/// that bracket are counted.
pub fn heatmap_rates(
    records: &[CrimeRecord],
    population: &[PopulationRecord],
    income: &[IncomeRecord],
    filters: &HeatmapFilters,
) -> AreaRates {
    let index = IncomeIndex::new(income);
    let filtered = filter_records(records, &filters.crime_type, &filters.year)
        .filter(|r| index.passes(&r.community_area, &filters.income_level));
    rates_from_counts(count_by_area(filtered), population)
}

/// Build one cell per boundary feature, in feature order.
///
/// Areas with no matching crimes are shaded with a rate of 0.
pub fn build_heatmap(
    records: &[CrimeRecord],
    geo: &[GeoFeature],
    population: &[PopulationRecord],
    income: &[IncomeRecord],
    filters: &HeatmapFilters,
) -> Heatmap {
    let rates = heatmap_rates(records, population, income, filters);
    let index = IncomeIndex::new(income);

    let max_rate = rates.values().copied().fold(0.0_f64, f64::max);

    let cells = geo
        .iter()
        .map(|feature| HeatmapCell {
            area: feature.area_number.clone(),
            community: feature.community.clone(),
            rate: rates.get(&feature.area_number).copied().unwrap_or(0.0),
            income: index.income(&feature.area_number),
        })
        .collect();

    Heatmap { cells, max_rate }
}
