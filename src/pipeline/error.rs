//! Error types for loading the crime-story datasets.
//!
//! Any of these aborts start-up: nothing is aggregated from a partial load.
//! Row-level problems are not errors; they are counted in a `LoadReport`.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an input file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("Failed to read {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars could not parse the file as CSV
    #[error("Failed to load CSV file {path}: {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// A required column is absent from the CSV header
    #[error("Column '{column}' not found in {path}", path = path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// The boundary file is not a valid GeoJSON FeatureCollection
    #[error("Malformed GeoJSON in {path}: {source}", path = path.display())]
    GeoJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file extension does not match what the dataset expects
    #[error("Unsupported file format for {path}: expected {expected}", path = path.display())]
    UnsupportedFormat { path: PathBuf, expected: &'static str },
}
