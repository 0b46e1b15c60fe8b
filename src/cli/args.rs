//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::pipeline::{CrimeTypeFilter, DataPaths, IncomeLevelFilter, YearFilter};

pub const DEFAULT_CRIMES_FILE: &str = "Chicago_Crimes_2019_to_2023_UPDATED.csv";
pub const DEFAULT_POPULATION_FILE: &str = "Chicago Population 2020.csv";
pub const DEFAULT_INCOME_FILE: &str = "Rounded_Median_Household_Income_DataFrame.csv";
pub const DEFAULT_GEO_FILE: &str = "Boundaries - Community Areas (current).geojson";

/// crimescope - Chicago crime rates by time, community area, income, and location
#[derive(Parser, Debug)]
#[command(name = "crimescope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the four input files under their default names
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Crime events CSV (Date, Primary Type, Community Area, Location Description).
    /// Defaults to <data-dir>/Chicago_Crimes_2019_to_2023_UPDATED.csv
    #[arg(long, global = true)]
    pub crimes: Option<PathBuf>,

    /// Population CSV (Community Number, Population).
    /// Defaults to "<data-dir>/Chicago Population 2020.csv"
    #[arg(long, global = true)]
    pub population: Option<PathBuf>,

    /// Median income CSV (Community Number, Median Household Income, Community Name).
    /// Defaults to <data-dir>/Rounded_Median_Household_Income_DataFrame.csv
    #[arg(long, global = true)]
    pub income: Option<PathBuf>,

    /// Community-area boundaries GeoJSON.
    /// Defaults to "<data-dir>/Boundaries - Community Areas (current).geojson"
    #[arg(long, global = true)]
    pub geo: Option<PathBuf>,

    /// Write the computed table to this JSON file
    #[arg(long, global = true, value_parser = validate_export_path)]
    pub export: Option<PathBuf>,

    /// Skip the banner and the input card
    #[arg(long, global = true, default_value = "false")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Crime rate per 100,000 residents over time
    Line {
        /// Crime type to include, or "all"
        #[arg(long, default_value = "all")]
        crime_type: CrimeTypeFilter,

        /// Bucket by month instead of by year
        #[arg(long, default_value = "false")]
        monthly: bool,
    },

    /// Crime rate against median household income per community
    Scatter {
        /// Crime type to include, or "all"
        #[arg(long, default_value = "all")]
        crime_type: CrimeTypeFilter,

        /// Calendar year to include, or "all"
        #[arg(long, default_value = "all")]
        year: YearFilter,
    },

    /// Crime rate per community-area boundary
    Heatmap {
        /// Crime type to include, or "all"
        #[arg(long, default_value = "all")]
        crime_type: CrimeTypeFilter,

        /// Calendar year to include, or "all"
        #[arg(long, default_value = "all")]
        year: YearFilter,

        /// Only count crimes in communities of this income level: all, low, medium, high
        #[arg(long, default_value = "all")]
        income_level: IncomeLevelFilter,
    },

    /// Crime counts per location category
    Bar {
        /// Calendar year to include, or "all"
        #[arg(long, default_value = "all")]
        year: YearFilter,
    },

    /// List the crime types and years available as filters
    Options,

    /// Walk through the scenes interactively
    Story,
}

impl Cli {
    fn resolve(&self, explicit: &Option<PathBuf>, default_name: &str) -> PathBuf {
        explicit
            .clone()
            .unwrap_or_else(|| self.data_dir.join(default_name))
    }

    /// Paths of the four input files, falling back to default names in the data directory
    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            crimes: self.resolve(&self.crimes, DEFAULT_CRIMES_FILE),
            population: self.resolve(&self.population, DEFAULT_POPULATION_FILE),
            income: self.resolve(&self.income, DEFAULT_INCOME_FILE),
            geo: self.resolve(&self.geo, DEFAULT_GEO_FILE),
        }
    }

    pub fn export_path(&self) -> Option<&Path> {
        self.export.as_deref()
    }
}

/// Validator for the export path
fn validate_export_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(path)
    } else {
        Err(format!("export path must end in .json, got '{}'", s))
    }
}
