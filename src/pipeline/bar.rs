//! Crime counts per location category

use serde::Serialize;

use super::filter::YearFilter;
use super::location::{LocationBucketer, LocationCategory};
use super::records::CrimeRecord;

/// Maximum number of bars shown
pub const MAX_BARS: usize = 20;

/// One bar of the bar view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: LocationCategory,
    pub count: usize,
}

/// Count crimes per location category for the selected year.
///
/// `Other` and blank labels are excluded. Output is descending by count, ties
/// keep the order in which the category was first seen, and at most
/// [`MAX_BARS`] entries are returned.
pub fn aggregate_by_location(
    records: &[CrimeRecord],
    bucketer: &LocationBucketer,
    year: &YearFilter,
) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in records.iter().filter(|r| year.matches(&r.year())) {
        let category = bucketer.categorize(&record.location_description);
        match counts.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount { category, count: 1 }),
        }
    }

    counts.retain(|c| c.category != LocationCategory::Other && !c.category.label().trim().is_empty());
    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(MAX_BARS);
    counts
}
