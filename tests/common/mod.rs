//! Shared test utilities and fixture generators

#![allow(dead_code)]

use chrono::NaiveDate;
use crimescope::pipeline::{CrimeRecord, DataPaths, GeoFeature, IncomeRecord, PopulationRecord};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a crime record from a `YYYY-MM-DD` date
pub fn crime(date: &str, primary_type: &str, area: &str, location: &str) -> CrimeRecord {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    CrimeRecord::new(date, primary_type, area, location)
}

pub fn population(area: &str, people: u64) -> PopulationRecord {
    PopulationRecord::new(area, people)
}

pub fn income(area: &str, median: f64, name: &str) -> IncomeRecord {
    IncomeRecord::new(area, median, name)
}

pub fn feature(area: &str, community: &str) -> GeoFeature {
    GeoFeature {
        area_number: area.to_string(),
        community: community.to_string(),
        geometry: serde_json::Value::Null,
    }
}

/// Crimes DataFrame in the layout of the Chicago portal export
///
/// - 2019: 1 THEFT in area 1 (RESIDENCE)
/// - 2020: 2 THEFT in area 5 (STREET, RESIDENCE), 1 legacy-labelled assault in area 5
/// - 2021: 1 BATTERY in area 77 (no population or income), 1 row with a bad date
pub fn create_crimes_dataframe() -> DataFrame {
    df! {
        "ID" => ["1", "2", "3", "4", "5", "6"],
        "Date" => [
            "01/15/2019 10:30:00 PM",
            "01/01/2020 12:00:00 AM",
            "06/01/2020 03:15:00 PM",
            "07/04/2020 11:00:00 AM",
            "03/03/2021 09:00:00 AM",
            "not a date",
        ],
        "Primary Type" => ["THEFT", "THEFT", " THEFT ", "CRIM SEXUAL ASSAULT", "BATTERY", "THEFT"],
        "Community Area" => ["1", "5", "5", "5", "77", "5"],
        "Location Description" => ["RESIDENCE", "STREET", "RESIDENCE", "APARTMENT", "ALLEY", "STREET"],
    }
    .unwrap()
}

pub fn create_population_dataframe() -> DataFrame {
    df! {
        "Community Number" => ["1", "5", "9"],
        "Community Name" => ["ROGERS PARK", "NORTH CENTER", "EDISON PARK"],
        "Population" => ["55,628", "1000", ""],
    }
    .unwrap()
}

pub fn create_income_dataframe() -> DataFrame {
    df! {
        "Community Number" => ["1", "5", "9"],
        "Median Household Income" => ["39999", "$95,000", "n/a"],
        "Community Name" => ["Rogers Park", "North Center", "Edison Park"],
    }
    .unwrap()
}

pub const GEOJSON_FIXTURE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "area_numbe": "1", "community": "ROGERS PARK" },
      "geometry": { "type": "MultiPolygon", "coordinates": [] }
    },
    {
      "type": "Feature",
      "properties": { "area_numbe": 5, "community": "NORTH CENTER" },
      "geometry": { "type": "MultiPolygon", "coordinates": [] }
    },
    {
      "type": "Feature",
      "properties": { "community": "NOWHERE" },
      "geometry": null
    }
  ]
}"#;

/// Write a DataFrame as CSV into `dir`
pub fn write_csv(dir: &Path, name: &str, df: &mut DataFrame) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();
    path
}

/// Write all four fixture files into a temporary directory
pub fn create_fixture_files() -> (TempDir, DataPaths) {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let crimes = write_csv(dir, "crimes.csv", &mut create_crimes_dataframe());
    let population = write_csv(dir, "population.csv", &mut create_population_dataframe());
    let income = write_csv(dir, "income.csv", &mut create_income_dataframe());
    let geo = dir.join("areas.geojson");
    std::fs::write(&geo, GEOJSON_FIXTURE).unwrap();

    (
        temp_dir,
        DataPaths {
            crimes,
            population,
            income,
            geo,
        },
    )
}

/// Assert two rates are equal within floating-point tolerance
pub fn assert_rate(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "Rate mismatch: expected {}, got {}",
        expected,
        actual
    );
}
