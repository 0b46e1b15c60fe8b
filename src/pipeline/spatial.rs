//! Crime rate per community area

use std::collections::BTreeMap;

use super::filter::{filter_records, CrimeTypeFilter, YearFilter};
use super::rate::{crime_rate, PopulationIndex};
use super::records::{CrimeRecord, PopulationRecord};

/// Area key → crimes per 100,000 residents of that area
pub type AreaRates = BTreeMap<String, f64>;

/// Count crimes passing the filters, grouped by area key
pub fn count_by_area<'a, I>(records: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a CrimeRecord>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.community_area.clone()).or_insert(0) += 1;
    }
    counts
}

/// Convert per-area counts into per-area rates.
///
/// Areas missing from the population table get a rate of 0.
pub fn rates_from_counts(
    counts: BTreeMap<String, usize>,
    population: &[PopulationRecord],
) -> AreaRates {
    let index = PopulationIndex::new(population);
    counts
        .into_iter()
        .map(|(area, count)| {
            let rate = crime_rate(count, index.get(&area));
            (area, rate)
        })
        .collect()
}

/// Crime rate per community area for the selected crime type and year.
///
/// Only areas with at least one matching crime appear in the result.
pub fn rates_by_area(
    records: &[CrimeRecord],
    population: &[PopulationRecord],
    crime_type: &CrimeTypeFilter,
    year: &YearFilter,
) -> AreaRates {
    let counts = count_by_area(filter_records(records, crime_type, year));
    rates_from_counts(counts, population)
}
