//! crimescope: Chicago Crime Story CLI
//!
//! Loads the four crime-story datasets and prints the derived table for the
//! chosen scene, or walks through every scene interactively.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;

use crimescope::cli::{run_story, views, Cli, Commands};
use crimescope::pipeline::{
    load_all_with_progress, DataPaths, Dataset, Granularity, HeatmapFilters, LoadProgress,
    LoadReport, LocationBucketer,
};
use crimescope::report::LoadSummary;
use crimescope::utils::{
    create_spinner, finish_with_error, finish_with_success, finish_with_warning, print_banner,
    print_completion, print_inputs, print_step_header, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = cli.data_paths();

    if !cli.quiet {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_inputs(&paths);
    }

    // Step 1: Load every dataset before any aggregation runs
    print_step_header(1, "Load Datasets");
    let step_start = Instant::now();
    let (dataset, report) = load_with_progress(&paths)?;
    let summary = LoadSummary::new(&dataset, report, step_start.elapsed());
    summary.display();
    warn_skipped(&report);

    // Step 2: Aggregate and show the requested scene
    print_step_header(2, "Aggregate");
    let export = cli.export_path();

    match &cli.command {
        Commands::Line {
            crime_type,
            monthly,
        } => {
            let granularity = if *monthly {
                Granularity::Monthly
            } else {
                Granularity::Yearly
            };
            views::show_line(&dataset, crime_type, granularity, export)?;
        }
        Commands::Scatter { crime_type, year } => {
            views::show_scatter(&dataset, crime_type, year, export)?;
        }
        Commands::Heatmap {
            crime_type,
            year,
            income_level,
        } => {
            let filters = HeatmapFilters {
                year: year.clone(),
                crime_type: crime_type.clone(),
                income_level: income_level.clone(),
            };
            views::show_heatmap(&dataset, &filters, export)?;
        }
        Commands::Bar { year } => {
            let bucketer = LocationBucketer::default();
            views::show_bar(&dataset, &bucketer, year, export)?;
        }
        Commands::Options => {
            views::show_options(&dataset, export)?;
        }
        Commands::Story => {
            run_story(&dataset)?;
        }
    }

    print_completion();

    Ok(())
}

/// Load the four datasets with a spinner per file. The first failure aborts.
fn load_with_progress(paths: &DataPaths) -> Result<(Dataset, LoadReport)> {
    let mut spinner: Option<ProgressBar> = None;

    load_all_with_progress(paths, |progress| match progress {
        LoadProgress::Started(kind) => {
            spinner = Some(create_spinner(&format!("Loading {}...", kind.label())));
        }
        LoadProgress::Loaded { kind, rows } => {
            if let Some(spinner) = spinner.take() {
                if rows == 0 {
                    finish_with_warning(&spinner, &format!("No usable {} rows", kind.label()));
                } else {
                    finish_with_success(
                        &spinner,
                        &format!("Loaded {} {} rows", rows, kind.label()),
                    );
                }
            }
        }
        LoadProgress::Failed(kind) => {
            if let Some(spinner) = spinner.take() {
                finish_with_error(&spinner, &format!("Failed to load {}", kind.label()));
            }
        }
    })
    .context("Error loading the data")
}

fn warn_skipped(report: &LoadReport) {
    if report.total_skipped() == 0 {
        return;
    }
    if report.skipped_crimes > 0 {
        print_warning(&format!(
            "Skipped {} crime(s) with a missing or unreadable date",
            report.skipped_crimes
        ));
    }
    if report.skipped_population > 0 {
        print_warning(&format!(
            "Skipped {} population row(s) without a valid population",
            report.skipped_population
        ));
    }
    if report.skipped_income > 0 {
        print_warning(&format!(
            "Skipped {} income row(s) without a valid income",
            report.skipped_income
        ));
    }
    if report.skipped_features > 0 {
        print_warning(&format!(
            "Skipped {} boundary feature(s) without an area number",
            report.skipped_features
        ));
    }
}
