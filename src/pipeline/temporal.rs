//! Crime rate over time, bucketed by year or by month

use chrono::Datelike;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::filter::{CrimeTypeFilter, Granularity};
use super::rate::{crime_rate, total_population};
use super::records::{CrimeRecord, PopulationRecord};

/// A calendar year or a calendar month.
///
/// Ordering is chronological within one granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeBucket {
    Year(i32),
    Month { year: i32, month: u32 },
}

impl TimeBucket {
    /// Bucket a date at the given granularity
    pub fn of(date: chrono::NaiveDate, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Yearly => TimeBucket::Year(date.year()),
            Granularity::Monthly => TimeBucket::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }

    pub fn year(&self) -> i32 {
        match *self {
            TimeBucket::Year(year) | TimeBucket::Month { year, .. } => year,
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeBucket::Year(year) => write!(f, "{}", year),
            TimeBucket::Month { year, month } => write!(f, "{}-{:02}", year, month),
        }
    }
}

impl Serialize for TimeBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One point of the line view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBucketRate {
    pub bucket: TimeBucket,
    /// Number of matching crimes in the bucket
    pub count: usize,
    /// Crimes per 100,000 residents of the whole city
    pub rate: f64,
}

/// Aggregate crimes into time buckets and normalize by total city population.
///
/// Buckets without any matching crime are omitted. Output is ascending by time.
pub fn aggregate_by_time(
    records: &[CrimeRecord],
    population: &[PopulationRecord],
    granularity: Granularity,
    crime_type: &CrimeTypeFilter,
) -> Vec<TimeBucketRate> {
    let total = total_population(population);

    let mut counts: BTreeMap<TimeBucket, usize> = BTreeMap::new();
    for record in records.iter().filter(|r| crime_type.matches(&r.primary_type)) {
        *counts.entry(TimeBucket::of(record.date, granularity)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(bucket, count)| TimeBucketRate {
            bucket,
            count,
            rate: crime_rate(count, total),
        })
        .collect()
}
