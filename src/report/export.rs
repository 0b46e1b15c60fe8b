//! JSON export of derived tables for a rendering collaborator

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

/// Metadata about the export run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the export (ISO 8601 format)
    pub timestamp: String,
    /// crimescope version
    pub crimescope_version: String,
    /// Which derived table this is (line, scatter, heatmap, bar, options)
    pub view: String,
    /// Filters the table was computed with
    pub filters: serde_json::Value,
}

/// A derived table with its metadata
#[derive(Serialize)]
pub struct TableExport<'a, T: Serialize> {
    pub metadata: ExportMetadata,
    pub data: &'a T,
}

/// Write a derived table and its filters to a pretty-printed JSON file
pub fn export_table<T, F>(data: &T, view: &str, filters: &F, output_path: &Path) -> Result<()>
where
    T: Serialize,
    F: Serialize,
{
    let export = TableExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            crimescope_version: env!("CARGO_PKG_VERSION").to_string(),
            view: view.to_string(),
            filters: serde_json::to_value(filters).context("Failed to serialize filters")?,
        },
        data,
    };

    let json = serde_json::to_string_pretty(&export).context("Failed to serialize table")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write export file: {}", output_path.display()))?;

    Ok(())
}
