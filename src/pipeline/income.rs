//! Joining area crime rates with median household income

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::filter::Selection;
use super::records::IncomeRecord;
use super::spatial::AreaRates;

/// Incomes below this are "low"
pub const LOW_INCOME_CEILING: f64 = 40_000.0;

/// Incomes above this are "high"
pub const HIGH_INCOME_FLOOR: f64 = 90_000.0;

/// Median household income bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeBracket {
    /// Less than $40k
    Low,
    /// $40k to $90k inclusive
    Medium,
    /// Greater than $90k
    High,
}

impl IncomeBracket {
    /// Classify an income. Non-finite incomes have no bracket.
    pub fn classify(income: f64) -> Option<Self> {
        if !income.is_finite() {
            None
        } else if income < LOW_INCOME_CEILING {
            Some(IncomeBracket::Low)
        } else if income <= HIGH_INCOME_FLOOR {
            Some(IncomeBracket::Medium)
        } else {
            Some(IncomeBracket::High)
        }
    }

    /// Legend label used in the scatter view
    pub fn label(&self) -> &'static str {
        match self {
            IncomeBracket::Low => "Less than $40k",
            IncomeBracket::Medium => "$40k to $90k",
            IncomeBracket::High => "Greater than $90k",
        }
    }
}

impl fmt::Display for IncomeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncomeBracket::Low => write!(f, "low"),
            IncomeBracket::Medium => write!(f, "medium"),
            IncomeBracket::High => write!(f, "high"),
        }
    }
}

impl FromStr for IncomeBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(IncomeBracket::Low),
            "medium" => Ok(IncomeBracket::Medium),
            "high" => Ok(IncomeBracket::High),
            _ => Err(format!(
                "Unknown income level: '{}'. Use 'all', 'low', 'medium', or 'high'.",
                s
            )),
        }
    }
}

/// Income-level filter for the heatmap view
pub type IncomeLevelFilter = Selection<IncomeBracket>;

/// Income lookup by area key
#[derive(Debug, Default)]
pub struct IncomeIndex<'a> {
    by_area: HashMap<&'a str, &'a IncomeRecord>,
}

impl<'a> IncomeIndex<'a> {
    /// Index an income table. A repeated area keeps its last row.
    pub fn new(income: &'a [IncomeRecord]) -> Self {
        let by_area = income
            .iter()
            .map(|r| (r.community_number.as_str(), r))
            .collect();
        Self { by_area }
    }

    pub fn get(&self, area: &str) -> Option<&'a IncomeRecord> {
        self.by_area.get(area).copied()
    }

    /// Median income of an area, `None` when unknown or not finite
    pub fn income(&self, area: &str) -> Option<f64> {
        self.get(area)
            .map(|r| r.median_income)
            .filter(|income| income.is_finite())
    }

    /// Whether an area passes an income-level filter.
    ///
    /// Areas without a usable income only pass `All`.
    pub fn passes(&self, area: &str, level: &IncomeLevelFilter) -> bool {
        match level {
            Selection::All => true,
            Selection::Only(bracket) => self
                .income(area)
                .and_then(IncomeBracket::classify)
                .is_some_and(|b| b == *bracket),
        }
    }
}

/// One point of the scatter view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub area: String,
    pub rate: f64,
    pub income: f64,
    pub name: String,
    pub bracket: IncomeBracket,
}

/// Left-join area rates against the income table.
///
/// Areas without an income match are dropped. Output is ascending by income.
pub fn join_income(rates: &AreaRates, income: &[IncomeRecord]) -> Vec<ScatterPoint> {
    let index = IncomeIndex::new(income);

    let mut points: Vec<ScatterPoint> = rates
        .iter()
        .filter_map(|(area, &rate)| {
            let record = index.get(area)?;
            let bracket = IncomeBracket::classify(record.median_income)?;
            Some(ScatterPoint {
                area: area.clone(),
                rate,
                income: record.median_income,
                name: record.community_name.clone(),
                bracket,
            })
        })
        .collect();

    points.sort_by(|a, b| a.income.total_cmp(&b.income));
    points
}
