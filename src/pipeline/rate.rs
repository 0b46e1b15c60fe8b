//! Per-capita rate computation and population lookups

use std::collections::HashMap;

use super::records::PopulationRecord;

/// Rates are expressed per this many residents
pub const PER_CAPITA_SCALE: f64 = 100_000.0;

/// Incidents per 100,000 residents.
///
/// Returns 0 when the population is zero, negative, or not finite, so the
/// result is always finite and non-negative.
pub fn crime_rate(count: usize, population: f64) -> f64 {
    if !population.is_finite() || population <= 0.0 {
        return 0.0;
    }
    count as f64 / population * PER_CAPITA_SCALE
}

/// Sum of every population record
pub fn total_population(population: &[PopulationRecord]) -> f64 {
    population.iter().map(|p| p.population as f64).sum()
}

/// Area key → population
#[derive(Debug, Default)]
pub struct PopulationIndex {
    by_area: HashMap<String, u64>,
}

impl PopulationIndex {
    /// Index a population table. A repeated area keeps its last value.
    pub fn new(population: &[PopulationRecord]) -> Self {
        let by_area = population
            .iter()
            .map(|p| (p.community_number.clone(), p.population))
            .collect();
        Self { by_area }
    }

    /// Population of an area, 0 when the area is unknown
    pub fn get(&self, area: &str) -> f64 {
        self.by_area.get(area).copied().unwrap_or(0) as f64
    }
}
