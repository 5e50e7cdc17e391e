//! Monthly projection table and summary KPIs

use crate::error::ModelResult;
use serde::{Deserialize, Serialize};

/// A single month of projection output.
///
/// Serialized names are the column headers consumed by charts and exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// 1-based month number
    #[serde(rename = "Month")]
    pub month: u32,

    #[serde(rename = "GrossAdds")]
    pub gross_adds: f64,

    /// End-of-month base, after churn
    #[serde(rename = "Subscribers")]
    pub subscribers: f64,

    #[serde(rename = "Revenue")]
    pub revenue: f64,

    #[serde(rename = "Wholesale")]
    pub wholesale: f64,

    #[serde(rename = "OPEX")]
    pub opex: f64,

    #[serde(rename = "Marketing")]
    pub marketing: f64,

    #[serde(rename = "EBIT")]
    pub ebit: f64,

    #[serde(rename = "Tax")]
    pub tax: f64,

    /// Net cash flow for the month
    #[serde(rename = "Cash")]
    pub cash: f64,

    /// Running total of cash through this month
    #[serde(rename = "CumCash")]
    pub cum_cash: f64,
}

/// Scenario KPIs derived from the monthly table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// First month (1-based) with positive cumulative cash, if reached
    pub payback_months: Option<u32>,

    /// Cash discounted monthly at the annual rate
    pub npv: f64,

    /// Largest cumulative funding shortfall
    pub peak_cash_need: f64,

    /// Subscribers at the final month, truncated
    pub sub_count_end: u64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Monthly rows, ordered by month
    pub rows: Vec<MonthlyRow>,

    pub summary: Summary,
}

impl ProjectionResult {
    /// Write the monthly table as CSV with the standard column headers
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> ModelResult<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Net cash column
    pub fn cash(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.cash).collect()
    }

    /// Cumulative cash column
    pub fn cum_cash(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.cum_cash).collect()
    }

    pub fn months(&self) -> usize {
        self.rows.len()
    }
}
