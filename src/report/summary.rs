//! Load summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use std::time::Duration;

use crate::pipeline::{Dataset, LoadReport};

/// Rows kept and skipped for each dataset, plus load time
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub crimes: usize,
    pub population: usize,
    pub income: usize,
    pub features: usize,
    pub report: LoadReport,
    pub load_time: Duration,
}

impl LoadSummary {
    pub fn new(dataset: &Dataset, report: LoadReport, load_time: Duration) -> Self {
        Self {
            crimes: dataset.crimes.len(),
            population: dataset.population.len(),
            income: dataset.income.len(),
            features: dataset.geo.len(),
            report,
            load_time,
        }
    }

    fn skipped_cell(skipped: usize) -> Cell {
        Cell::new(skipped).fg(if skipped == 0 { Color::White } else { Color::Yellow })
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("DATASETS").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Dataset").add_attribute(Attribute::Bold),
            Cell::new("Rows").add_attribute(Attribute::Bold),
            Cell::new("Skipped").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🚨 Crimes"),
            Cell::new(self.crimes).fg(Color::Green),
            Self::skipped_cell(self.report.skipped_crimes),
        ]);
        table.add_row(vec![
            Cell::new("👥 Population"),
            Cell::new(self.population).fg(Color::Green),
            Self::skipped_cell(self.report.skipped_population),
        ]);
        table.add_row(vec![
            Cell::new("💵 Income"),
            Cell::new(self.income).fg(Color::Green),
            Self::skipped_cell(self.report.skipped_income),
        ]);
        table.add_row(vec![
            Cell::new("🗺️  Boundaries"),
            Cell::new(self.features).fg(Color::Green),
            Self::skipped_cell(self.report.skipped_features),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        println!(
            "    {}",
            style(format!("Loaded in {:.2}s", self.load_time.as_secs_f64())).dim()
        );
    }
}
