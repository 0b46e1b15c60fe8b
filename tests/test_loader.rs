//! Tests for dataset loading and normalization

use chrono::NaiveDate;
use crimescope::pipeline::{
    load_all, load_all_with_progress, load_crimes, load_geo_features, load_income,
    load_population, parse_crime_date, parse_number, DatasetKind, LoadError, LoadProgress,
};
use std::io::Write;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_load_all_fixture_files() {
    let (_temp_dir, paths) = create_fixture_files();

    let (dataset, report) = load_all(&paths).unwrap();

    assert_eq!(dataset.crimes.len(), 5, "Bad-date row should be skipped");
    assert_eq!(report.skipped_crimes, 1);
    assert_eq!(dataset.population.len(), 2, "Blank population should be skipped");
    assert_eq!(report.skipped_population, 1);
    assert_eq!(dataset.income.len(), 2, "Unparseable income should be skipped");
    assert_eq!(report.skipped_income, 1);
    assert_eq!(dataset.geo.len(), 2, "Feature without area number should be skipped");
    assert_eq!(report.skipped_features, 1);
    assert_eq!(report.total_skipped(), 4);
}

#[test]
fn test_crime_normalization_on_load() {
    let (_temp_dir, paths) = create_fixture_files();

    let (crimes, _) = load_crimes(&paths.crimes).unwrap();

    assert_eq!(crimes[0].date, NaiveDate::from_ymd_opt(2019, 1, 15).unwrap());
    assert_eq!(crimes[2].primary_type, "THEFT", "Primary type should be trimmed");
    assert_eq!(
        crimes[3].primary_type, "SEXUAL ASSAULT",
        "Legacy label should be coalesced"
    );
    assert_eq!(crimes[4].community_area, "77");
    assert_eq!(crimes[4].location_description, "ALLEY");
}

#[test]
fn test_population_thousands_separator() {
    let (_temp_dir, paths) = create_fixture_files();

    let (population, skipped) = load_population(&paths.population).unwrap();

    assert_eq!(skipped, 1);
    assert_eq!(population[0].community_number, "1");
    assert_eq!(population[0].population, 55_628);
    assert_eq!(population[1].population, 1000);
}

#[test]
fn test_income_currency_format() {
    let (_temp_dir, paths) = create_fixture_files();

    let (income, _) = load_income(&paths.income).unwrap();

    assert_eq!(income[1].community_number, "5");
    assert_eq!(income[1].median_income, 95_000.0);
    assert_eq!(income[1].community_name, "North Center");
}

#[test]
fn test_geo_numeric_area_property() {
    let (_temp_dir, paths) = create_fixture_files();

    let (features, skipped) = load_geo_features(&paths.geo).unwrap();

    assert_eq!(skipped, 1);
    assert_eq!(features[1].area_number, "5", "Numeric area_numbe should become a key");
    assert_eq!(features[1].community, "NORTH CENTER");
    assert!(features[0].geometry.is_object(), "Geometry should be carried through");
}

#[test]
fn test_missing_column_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("population.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "Area,People").unwrap();
    writeln!(file, "1,100").unwrap();
    drop(file);

    let result = load_population(&csv_path);

    match result {
        Err(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "Community Number"),
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
}

#[test]
fn test_nonexistent_file() {
    let path = std::path::Path::new("/nonexistent/path/to/crimes.csv");

    let result = load_crimes(path);

    assert!(
        matches!(result, Err(LoadError::Io { .. })),
        "Nonexistent file should be an I/O error"
    );
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("crimes.xlsx");
    std::fs::File::create(&bad_path).unwrap();

    let result = load_crimes(&bad_path);

    assert!(matches!(result, Err(LoadError::UnsupportedFormat { .. })));
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("Unsupported"),
        "Error message should mention unsupported format: {}",
        err_msg
    );
}

#[test]
fn test_malformed_geojson() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("areas.geojson");
    std::fs::write(&path, "{ \"type\": \"FeatureCollection\" ").unwrap();

    let result = load_geo_features(&path);

    assert!(matches!(result, Err(LoadError::GeoJson { .. })));
}

#[test]
fn test_load_all_aborts_on_first_failure() {
    let (_temp_dir, mut paths) = create_fixture_files();
    paths.income = paths.income.with_file_name("missing.csv");

    assert!(load_all(&paths).is_err(), "A missing input should abort the load");
}

#[test]
fn test_load_progress_reports_each_dataset() {
    let (_temp_dir, paths) = create_fixture_files();
    let mut events = Vec::new();

    let (dataset, _) = load_all_with_progress(&paths, |progress| events.push(progress)).unwrap();

    assert_eq!(
        events,
        vec![
            LoadProgress::Started(DatasetKind::Crimes),
            LoadProgress::Loaded {
                kind: DatasetKind::Crimes,
                rows: dataset.crimes.len()
            },
            LoadProgress::Started(DatasetKind::Population),
            LoadProgress::Loaded {
                kind: DatasetKind::Population,
                rows: dataset.population.len()
            },
            LoadProgress::Started(DatasetKind::Income),
            LoadProgress::Loaded {
                kind: DatasetKind::Income,
                rows: dataset.income.len()
            },
            LoadProgress::Started(DatasetKind::Boundaries),
            LoadProgress::Loaded {
                kind: DatasetKind::Boundaries,
                rows: dataset.geo.len()
            },
        ]
    );
}

#[test]
fn test_load_progress_stops_at_failed_dataset() {
    let (_temp_dir, mut paths) = create_fixture_files();
    paths.population = paths.population.with_file_name("missing.csv");
    let mut events = Vec::new();

    let result = load_all_with_progress(&paths, |progress| events.push(progress));

    assert!(matches!(result, Err(LoadError::Io { .. })));
    assert_eq!(events.len(), 4, "Loading should stop after the failure");
    assert_eq!(events[2], LoadProgress::Started(DatasetKind::Population));
    assert_eq!(events[3], LoadProgress::Failed(DatasetKind::Population));
}

#[test]
fn test_parse_crime_date_formats() {
    let expected = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();

    assert_eq!(parse_crime_date("06/01/2020 03:15:00 PM"), Some(expected));
    assert_eq!(parse_crime_date("2020-06-01T15:15:00"), Some(expected));
    assert_eq!(parse_crime_date("2020-06-01T15:15:00.000"), Some(expected));
    assert_eq!(parse_crime_date("2020-06-01 15:15:00"), Some(expected));
    assert_eq!(parse_crime_date("2020-06-01"), Some(expected));
    assert_eq!(parse_crime_date("06/01/2020"), Some(expected));
    assert_eq!(parse_crime_date(""), None);
    assert_eq!(parse_crime_date("yesterday"), None);
}

#[test]
fn test_parse_number_formats() {
    assert_eq!(parse_number("1000"), Some(1000.0));
    assert_eq!(parse_number(" 2,746,388 "), Some(2_746_388.0));
    assert_eq!(parse_number("$40,000"), Some(40_000.0));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("NaN"), None);
}
