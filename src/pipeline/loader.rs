//! Dataset loader for the crime, population, income, and boundary files
//!
//! CSV files are read with polars using text columns only, so identifiers keep
//! their literal form and every numeric conversion happens here, row by row.
//! Rows that cannot be converted are skipped and counted in [`LoadReport`].

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::LoadError;
use super::records::{
    normalize_area_key, CrimeRecord, Dataset, GeoFeature, IncomeRecord, PopulationRecord,
};

pub const CRIME_DATE_COLUMN: &str = "Date";
pub const CRIME_TYPE_COLUMN: &str = "Primary Type";
pub const CRIME_AREA_COLUMN: &str = "Community Area";
pub const CRIME_LOCATION_COLUMN: &str = "Location Description";
pub const COMMUNITY_NUMBER_COLUMN: &str = "Community Number";
pub const POPULATION_COLUMN: &str = "Population";
pub const INCOME_COLUMN: &str = "Median Household Income";
pub const COMMUNITY_NAME_COLUMN: &str = "Community Name";

/// GeoJSON property holding the area number (truncated to 10 chars by shapefile export)
const GEO_AREA_PROPERTY: &str = "area_numbe";
const GEO_AREA_FALLBACK_PROPERTY: &str = "area_number";
const GEO_NAME_PROPERTY: &str = "community";

/// Timestamp formats seen in crime exports, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Date-only formats, tried after the timestamp formats
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Locations of the four input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub crimes: PathBuf,
    pub population: PathBuf,
    pub income: PathBuf,
    pub geo: PathBuf,
}

/// Rows skipped per dataset while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Crimes with a missing or unparseable date
    pub skipped_crimes: usize,
    /// Population rows with a missing or invalid population
    pub skipped_population: usize,
    /// Income rows with a missing or invalid income
    pub skipped_income: usize,
    /// Boundary features without an area number
    pub skipped_features: usize,
}

impl LoadReport {
    pub fn total_skipped(&self) -> usize {
        self.skipped_crimes + self.skipped_population + self.skipped_income + self.skipped_features
    }
}

/// One of the four input datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Crimes,
    Population,
    Income,
    Boundaries,
}

impl DatasetKind {
    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Crimes => "crimes",
            DatasetKind::Population => "population",
            DatasetKind::Income => "median income",
            DatasetKind::Boundaries => "community-area boundaries",
        }
    }
}

/// Progress of [`load_all_with_progress`], reported once per step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadProgress {
    Started(DatasetKind),
    Loaded { kind: DatasetKind, rows: usize },
    Failed(DatasetKind),
}

/// Load all four datasets. Any failure aborts the whole load.
pub fn load_all(paths: &DataPaths) -> Result<(Dataset, LoadReport), LoadError> {
    load_all_with_progress(paths, |_| {})
}

/// Load all four datasets in order, reporting each step to `on_progress`.
///
/// The first failure is reported as [`LoadProgress::Failed`] and aborts the
/// load. Datasets after it are never started.
pub fn load_all_with_progress<F>(
    paths: &DataPaths,
    mut on_progress: F,
) -> Result<(Dataset, LoadReport), LoadError>
where
    F: FnMut(LoadProgress),
{
    let (crimes, skipped_crimes) =
        load_step(DatasetKind::Crimes, &mut on_progress, || load_crimes(&paths.crimes))?;
    let (population, skipped_population) =
        load_step(DatasetKind::Population, &mut on_progress, || {
            load_population(&paths.population)
        })?;
    let (income, skipped_income) =
        load_step(DatasetKind::Income, &mut on_progress, || load_income(&paths.income))?;
    let (geo, skipped_features) =
        load_step(DatasetKind::Boundaries, &mut on_progress, || {
            load_geo_features(&paths.geo)
        })?;

    let dataset = Dataset {
        crimes,
        population,
        income,
        geo,
    };
    let report = LoadReport {
        skipped_crimes,
        skipped_population,
        skipped_income,
        skipped_features,
    };
    Ok((dataset, report))
}

fn load_step<T, F, L>(
    kind: DatasetKind,
    on_progress: &mut F,
    load: L,
) -> Result<(Vec<T>, usize), LoadError>
where
    F: FnMut(LoadProgress),
    L: FnOnce() -> Result<(Vec<T>, usize), LoadError>,
{
    on_progress(LoadProgress::Started(kind));
    match load() {
        Ok((records, skipped)) => {
            on_progress(LoadProgress::Loaded {
                kind,
                rows: records.len(),
            });
            Ok((records, skipped))
        }
        Err(e) => {
            on_progress(LoadProgress::Failed(kind));
            Err(e)
        }
    }
}

/// Load crime events, returning the records and the number of skipped rows
pub fn load_crimes(path: &Path) -> Result<(Vec<CrimeRecord>, usize), LoadError> {
    let df = read_text_csv(path)?;
    let dates = text_column(&df, path, CRIME_DATE_COLUMN)?;
    let types = text_column(&df, path, CRIME_TYPE_COLUMN)?;
    let areas = text_column(&df, path, CRIME_AREA_COLUMN)?;
    let locations = text_column(&df, path, CRIME_LOCATION_COLUMN)?;

    let mut records = Vec::with_capacity(df.height());
    let mut skipped = 0;

    for (((date, primary_type), area), location) in dates
        .into_iter()
        .zip(types.into_iter())
        .zip(areas.into_iter())
        .zip(locations.into_iter())
    {
        match date.and_then(parse_crime_date) {
            Some(date) => records.push(CrimeRecord::new(
                date,
                primary_type.unwrap_or(""),
                area.unwrap_or(""),
                location.unwrap_or(""),
            )),
            None => skipped += 1,
        }
    }

    Ok((records, skipped))
}

/// Load population per community area
pub fn load_population(path: &Path) -> Result<(Vec<PopulationRecord>, usize), LoadError> {
    let df = read_text_csv(path)?;
    let numbers = text_column(&df, path, COMMUNITY_NUMBER_COLUMN)?;
    let populations = text_column(&df, path, POPULATION_COLUMN)?;

    let mut records = Vec::with_capacity(df.height());
    let mut skipped = 0;

    for (number, population) in numbers.into_iter().zip(populations.into_iter()) {
        let parsed = population
            .and_then(parse_number)
            .filter(|p| *p >= 0.0)
            .map(|p| p.round() as u64);
        match (number, parsed) {
            (Some(number), Some(population)) => {
                records.push(PopulationRecord::new(number, population))
            }
            _ => skipped += 1,
        }
    }

    Ok((records, skipped))
}

/// Load median household income per community area
pub fn load_income(path: &Path) -> Result<(Vec<IncomeRecord>, usize), LoadError> {
    let df = read_text_csv(path)?;
    let numbers = text_column(&df, path, COMMUNITY_NUMBER_COLUMN)?;
    let incomes = text_column(&df, path, INCOME_COLUMN)?;
    let names = text_column(&df, path, COMMUNITY_NAME_COLUMN)?;

    let mut records = Vec::with_capacity(df.height());
    let mut skipped = 0;

    for ((number, income), name) in numbers
        .into_iter()
        .zip(incomes.into_iter())
        .zip(names.into_iter())
    {
        match (number, income.and_then(parse_number)) {
            (Some(number), Some(income)) => {
                records.push(IncomeRecord::new(number, income, name.unwrap_or("")))
            }
            _ => skipped += 1,
        }
    }

    Ok((records, skipped))
}

#[derive(Deserialize)]
struct RawFeatureCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    geometry: serde_json::Value,
}

/// Load community-area boundaries from a GeoJSON FeatureCollection
pub fn load_geo_features(path: &Path) -> Result<(Vec<GeoFeature>, usize), LoadError> {
    require_extension(path, &["geojson", "json"], "geojson or json")?;

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let collection: RawFeatureCollection =
        serde_json::from_str(&text).map_err(|source| LoadError::GeoJson {
            path: path.to_path_buf(),
            source,
        })?;

    let mut features = Vec::with_capacity(collection.features.len());
    let mut skipped = 0;

    for raw in collection.features {
        let properties = raw.properties.unwrap_or_default();
        let area = properties
            .get(GEO_AREA_PROPERTY)
            .or_else(|| properties.get(GEO_AREA_FALLBACK_PROPERTY))
            .and_then(property_text);
        let Some(area) = area else {
            skipped += 1;
            continue;
        };
        let community = properties
            .get(GEO_NAME_PROPERTY)
            .and_then(property_text)
            .unwrap_or_default();

        features.push(GeoFeature {
            area_number: normalize_area_key(&area),
            community,
            geometry: raw.geometry,
        });
    }

    Ok((features, skipped))
}

/// Parse a crime timestamp, keeping only the calendar date
pub fn parse_crime_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        })
}

/// Parse a number that may carry a leading '$' and thousands separators
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn require_extension(path: &Path, allowed: &[&str], expected: &'static str) -> Result<(), LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if allowed.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            expected,
        })
    }
}

/// Read a CSV with every column as text
fn read_text_csv(path: &Path) -> Result<DataFrame, LoadError> {
    require_extension(path, &["csv"], "csv")?;

    // LazyCsvReader defers I/O errors until collect, so check up front
    std::fs::metadata(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let csv_error = |source: PolarsError| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(csv_error)
}

fn text_column<'a>(
    df: &'a DataFrame,
    path: &Path,
    name: &str,
) -> Result<&'a StringChunked, LoadError> {
    let column = df.column(name).map_err(|_| LoadError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })?;
    column.str().map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

fn property_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
