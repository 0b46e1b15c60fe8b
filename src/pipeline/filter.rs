//! Filter selections shared by every aggregation

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::records::CrimeRecord;

/// Keyword accepted on the command line for "no filter"
pub const ALL_KEYWORD: &str = "all";

/// Either every value or exactly one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(Selection::All);
        }
        trimmed
            .parse::<T>()
            .map(Selection::Only)
            .map_err(|e| format!("'{}' is not a valid selection: {}", s, e))
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{}", ALL_KEYWORD),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Serialized in the same textual form the command line accepts
impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Crime-type filter (exact equality on the normalized primary type)
pub type CrimeTypeFilter = Selection<String>;

/// Calendar-year filter
pub type YearFilter = Selection<i32>;

/// Time bucket size for the line view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Yearly,
    Monthly,
}

impl Granularity {
    pub fn toggled(self) -> Self {
        match self {
            Granularity::Yearly => Granularity::Monthly,
            Granularity::Monthly => Granularity::Yearly,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Yearly => write!(f, "yearly"),
            Granularity::Monthly => write!(f, "monthly"),
        }
    }
}

/// Records passing both the crime-type and year filters
pub fn filter_records<'a>(
    records: &'a [CrimeRecord],
    crime_type: &'a CrimeTypeFilter,
    year: &'a YearFilter,
) -> impl Iterator<Item = &'a CrimeRecord> + 'a {
    records
        .iter()
        .filter(move |r| crime_type.matches(&r.primary_type) && year.matches(&r.year()))
}
