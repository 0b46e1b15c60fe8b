//! Bucketing free-text location descriptions into broad categories

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Broad location category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LocationCategory {
    Residential,
    Business,
    Public,
    Other,
}

impl LocationCategory {
    pub fn label(&self) -> &'static str {
        match self {
            LocationCategory::Residential => "Residential",
            LocationCategory::Business => "Business",
            LocationCategory::Public => "Public",
            LocationCategory::Other => "Other",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chicago location descriptions per category, in match-priority order
pub const CHICAGO_LOCATION_TABLE: &[(LocationCategory, &[&str])] = &[
    (
        LocationCategory::Residential,
        &[
            "RESIDENCE",
            "APARTMENT",
            "RESIDENCE - PORCH / HALLWAY",
            "RESIDENCE PORCH/HALLWAY",
            "RESIDENCE - YARD (FRONT / BACK)",
            "RESIDENTIAL YARD (FRONT/BACK)",
            "RESIDENCE - GARAGE",
            "RESIDENCE-GARAGE",
        ],
    ),
    (
        LocationCategory::Business,
        &[
            "SMALL RETAIL STORE",
            "RESTAURANT",
            "DEPARTMENT STORE",
            "GROCERY FOOD STORE",
            "COMMERCIAL / BUSINESS OFFICE",
            "CONVENIENCE STORE",
            "BAR OR TAVERN",
            "HOTEL / MOTEL",
            "DRUG STORE",
        ],
    ),
    (
        LocationCategory::Public,
        &[
            "STREET",
            "SIDEWALK",
            "ALLEY",
            "PARKING LOT / GARAGE (NON RESIDENTIAL)",
            "PARKING LOT/GARAGE(NON.RESID.)",
            "VEHICLE NON-COMMERCIAL",
            "GAS STATION",
            "PARK PROPERTY",
            "SCHOOL - PUBLIC BUILDING",
            "SCHOOL - PUBLIC GROUNDS",
            "SCHOOL, PUBLIC, BUILDING",
            "CTA TRAIN",
        ],
    ),
];

/// Maps location descriptions to categories by exact, case-sensitive match.
///
/// Built once from a table and shared by every bar aggregation.
#[derive(Debug, Clone)]
pub struct LocationBucketer {
    lookup: HashMap<String, LocationCategory>,
}

impl LocationBucketer {
    /// Build from a priority-ordered table. When a description is listed
    /// under several categories the earliest one wins.
    pub fn from_table(table: &[(LocationCategory, &[&str])]) -> Self {
        let mut lookup = HashMap::new();
        for (category, descriptions) in table {
            for description in descriptions.iter() {
                lookup.entry(description.to_string()).or_insert(*category);
            }
        }
        Self { lookup }
    }

    /// Category of a description, `Other` when unlisted
    pub fn categorize(&self, description: &str) -> LocationCategory {
        self.lookup
            .get(description)
            .copied()
            .unwrap_or(LocationCategory::Other)
    }
}

impl Default for LocationBucketer {
    fn default() -> Self {
        Self::from_table(CHICAGO_LOCATION_TABLE)
    }
}
