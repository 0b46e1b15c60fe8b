//! Tests for per-area rates, the income join, and the heatmap

use crimescope::pipeline::{
    build_heatmap, heatmap_rates, join_income, rates_by_area, HeatmapFilters, IncomeBracket,
    Selection,
};

#[path = "common/mod.rs"]
mod common;

use common::*;

fn sample_records() -> Vec<crimescope::pipeline::CrimeRecord> {
    vec![
        crime("2020-01-01", "THEFT", "1", "STREET"),
        crime("2020-02-01", "THEFT", "5", "STREET"),
        crime("2020-03-01", "THEFT", "5", "STREET"),
        crime("2021-03-01", "BATTERY", "5", "STREET"),
        crime("2021-04-01", "BATTERY", "77", "STREET"),
    ]
}

#[test]
fn test_rates_by_area_uses_area_population() {
    let records = sample_records();
    let population = vec![population("1", 2000), population("5", 1000)];

    let rates = rates_by_area(&records, &population, &Selection::All, &Selection::All);

    assert_eq!(rates.len(), 3);
    assert_rate(rates["1"], 50.0);
    assert_rate(rates["5"], 300.0);
    assert_eq!(rates["77"], 0.0, "Area without population should have rate 0");
}

#[test]
fn test_rates_by_area_zero_population() {
    let records = sample_records();
    let population = vec![population("1", 2000), population("5", 0)];

    let rates = rates_by_area(&records, &population, &Selection::All, &Selection::All);

    assert_eq!(rates["5"], 0.0, "Area with zero population should have rate 0");
    assert!(rates["5"].is_finite());
    assert_rate(rates["1"], 50.0);
}

#[test]
fn test_rates_by_area_filters() {
    let records = sample_records();
    let population = vec![population("1", 2000), population("5", 1000)];

    let rates = rates_by_area(
        &records,
        &population,
        &Selection::Only("THEFT".to_string()),
        &Selection::Only(2020),
    );
    assert_eq!(rates.keys().collect::<Vec<_>>(), vec!["1", "5"]);
    assert_rate(rates["5"], 200.0);

    let none = rates_by_area(&records, &population, &Selection::All, &Selection::Only(2018));
    assert!(none.is_empty(), "Empty filter result is an empty mapping");
}

#[test]
fn test_area_keys_join_across_formats() {
    let records = vec![crime("2020-01-01", "THEFT", "05", "STREET")];
    let population = vec![population("5.0", 1000)];

    let rates = rates_by_area(&records, &population, &Selection::All, &Selection::All);

    assert_rate(rates["5"], 100.0);
}

#[test]
fn test_join_income_drops_unmatched_and_sorts() {
    let records = sample_records();
    let population = vec![population("1", 2000), population("5", 1000)];
    let incomes = vec![
        income("5", 95_000.0, "North Center"),
        income("1", 39_999.0, "Rogers Park"),
        income("9", f64::NAN, "Edison Park"),
    ];

    let rates = rates_by_area(&records, &population, &Selection::All, &Selection::All);
    let points = join_income(&rates, &incomes);

    assert_eq!(points.len(), 2, "Area 77 has no income and must be dropped");
    assert_eq!(points[0].area, "1");
    assert_eq!(points[0].bracket, IncomeBracket::Low);
    assert_eq!(points[1].name, "North Center");
    assert_eq!(points[1].bracket, IncomeBracket::High);
    assert!(points.iter().all(|p| !p.income.is_nan()));
    assert!(points.windows(2).all(|w| w[0].income <= w[1].income));
}

#[test]
fn test_join_income_skips_nan_income() {
    let records = vec![crime("2020-01-01", "THEFT", "9", "STREET")];
    let population = vec![population("9", 100)];
    let incomes = vec![income("9", f64::NAN, "Edison Park")];

    let rates = rates_by_area(&records, &population, &Selection::All, &Selection::All);

    assert!(join_income(&rates, &incomes).is_empty());
}

#[test]
fn test_income_brackets_partition() {
    let samples = [0.0, 1.0, 39_999.99, 40_000.0, 65_000.0, 90_000.0, 90_000.01, 1e9, -5.0];
    for income in samples {
        let bracket = IncomeBracket::classify(income);
        assert!(bracket.is_some(), "Finite income {} must have a bracket", income);

        let matching = [
            income < 40_000.0,
            (40_000.0..=90_000.0).contains(&income),
            income > 90_000.0,
        ]
        .iter()
        .filter(|m| **m)
        .count();
        assert_eq!(matching, 1, "Brackets must not overlap at {}", income);
    }

    assert_eq!(IncomeBracket::classify(39_999.0), Some(IncomeBracket::Low));
    assert_eq!(IncomeBracket::classify(40_000.0), Some(IncomeBracket::Medium));
    assert_eq!(IncomeBracket::classify(90_000.0), Some(IncomeBracket::Medium));
    assert_eq!(IncomeBracket::classify(90_001.0), Some(IncomeBracket::High));
    assert_eq!(IncomeBracket::classify(f64::INFINITY), None);
}

#[test]
fn test_heatmap_cells_follow_features() {
    let records = sample_records();
    let population = vec![population("1", 2000), population("5", 1000)];
    let incomes = vec![income("1", 39_999.0, "Rogers Park")];
    let geo = vec![
        feature("5", "NORTH CENTER"),
        feature("1", "ROGERS PARK"),
        feature("42", "WOODLAWN"),
    ];

    let heatmap = build_heatmap(&records, &geo, &population, &incomes, &HeatmapFilters::default());

    let areas: Vec<&str> = heatmap.cells.iter().map(|c| c.area.as_str()).collect();
    assert_eq!(areas, vec!["5", "1", "42"]);
    assert_rate(heatmap.cells[0].rate, 300.0);
    assert_eq!(heatmap.cells[0].income, None);
    assert_eq!(heatmap.cells[1].income, Some(39_999.0));
    assert_eq!(heatmap.cells[2].rate, 0.0, "Area without crimes is shaded 0");
    assert_rate(heatmap.max_rate, 300.0);
}

#[test]
fn test_heatmap_income_level_filter() {
    let records = sample_records();
    let population = vec![population("1", 2000), population("5", 1000)];
    let incomes = vec![
        income("1", 39_999.0, "Rogers Park"),
        income("5", 95_000.0, "North Center"),
    ];

    let low = HeatmapFilters {
        income_level: Selection::Only(IncomeBracket::Low),
        ..Default::default()
    };
    let rates = heatmap_rates(&records, &population, &incomes, &low);
    assert_eq!(rates.keys().collect::<Vec<_>>(), vec!["1"]);

    let medium = HeatmapFilters {
        income_level: Selection::Only(IncomeBracket::Medium),
        ..Default::default()
    };
    let rates = heatmap_rates(&records, &population, &incomes, &medium);
    assert!(rates.is_empty(), "Area 77 has no income and never passes a bracket");
}

#[test]
fn test_heatmap_empty_result() {
    let geo = vec![feature("1", "ROGERS PARK")];
    let filters = HeatmapFilters {
        year: Selection::Only(1999),
        ..Default::default()
    };

    let heatmap = build_heatmap(&sample_records(), &geo, &[], &[], &filters);

    assert_eq!(heatmap.max_rate, 0.0);
    assert_eq!(heatmap.cells.len(), 1);
    assert_eq!(heatmap.cells[0].rate, 0.0);
}
