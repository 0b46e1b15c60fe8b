//! Record types for the four crime-story datasets and their normalization
//!
//! Records are normalized once when loaded and are read-only afterwards.
//! Every aggregation works off these types rather than raw DataFrames.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Legacy primary-type labels that were renamed in the source data
const LEGACY_SEXUAL_ASSAULT_LABELS: [&str; 2] = ["CRIM SEXUAL ASSAULT", "CRIMINAL SEXUAL ASSAULT"];

/// Current label for all sexual assault records
const SEXUAL_ASSAULT_LABEL: &str = "SEXUAL ASSAULT";

/// A single reported crime
#[derive(Debug, Clone, PartialEq)]
pub struct CrimeRecord {
    /// Date the crime occurred (time of day is discarded)
    pub date: NaiveDate,
    /// Normalized primary type, e.g. "THEFT"
    pub primary_type: String,
    /// Normalized community-area key
    pub community_area: String,
    /// Location description, kept verbatim for exact matching
    pub location_description: String,
}

impl CrimeRecord {
    /// Build a record, normalizing the primary type and the area key
    pub fn new(
        date: NaiveDate,
        primary_type: &str,
        community_area: &str,
        location_description: &str,
    ) -> Self {
        Self {
            date,
            primary_type: normalize_primary_type(primary_type),
            community_area: normalize_area_key(community_area),
            location_description: location_description.to_string(),
        }
    }

    /// Calendar year of the crime
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Population of one community area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationRecord {
    pub community_number: String,
    pub population: u64,
}

impl PopulationRecord {
    pub fn new(community_number: &str, population: u64) -> Self {
        Self {
            community_number: normalize_area_key(community_number),
            population,
        }
    }
}

/// Median household income of one community area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeRecord {
    pub community_number: String,
    pub median_income: f64,
    pub community_name: String,
}

impl IncomeRecord {
    pub fn new(community_number: &str, median_income: f64, community_name: &str) -> Self {
        Self {
            community_number: normalize_area_key(community_number),
            median_income,
            community_name: community_name.trim().to_string(),
        }
    }
}

/// A community-area boundary from the GeoJSON file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoFeature {
    /// Normalized community-area key
    pub area_number: String,
    /// Display name of the community
    pub community: String,
    /// Polygon geometry, passed through untouched
    pub geometry: serde_json::Value,
}

/// All four datasets, loaded together
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub crimes: Vec<CrimeRecord>,
    pub population: Vec<PopulationRecord>,
    pub income: Vec<IncomeRecord>,
    pub geo: Vec<GeoFeature>,
}

/// Trim a primary type and fold legacy labels into the current one
pub fn normalize_primary_type(raw: &str) -> String {
    let trimmed = raw.trim();
    if LEGACY_SEXUAL_ASSAULT_LABELS.contains(&trimmed) {
        SEXUAL_ASSAULT_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalize a community-area identifier so that every dataset joins on the same key.
///
/// Integral numbers lose leading zeros and decimal suffixes ("05", "5.0" → "5").
/// Anything else is only trimmed.
pub fn normalize_area_key(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
        _ => trimmed.to_string(),
    }
}
