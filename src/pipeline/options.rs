//! Values offered by the crime-type and year filters

use std::collections::BTreeSet;

use super::records::CrimeRecord;

/// Year always offered by the year filters, even without data for it
pub const ALWAYS_OFFERED_YEAR: i32 = 2019;

/// Distinct primary types, sorted
pub fn crime_types(records: &[CrimeRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.primary_type.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct calendar years plus [`ALWAYS_OFFERED_YEAR`], ascending
pub fn years(records: &[CrimeRecord]) -> Vec<i32> {
    let mut years: BTreeSet<i32> = records.iter().map(CrimeRecord::year).collect();
    years.insert(ALWAYS_OFFERED_YEAR);
    years.into_iter().collect()
}
