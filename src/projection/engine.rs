//! Core projection engine: subscriber recurrence, then P&L and cash

use crate::assumptions::ParameterSet;
use crate::error::ModelResult;
use super::cashflows::{MonthlyRow, ProjectionResult, Summary};
use super::metrics;
use super::state::project_subscribers;

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: ParameterSet,
}

impl ProjectionEngine {
    /// Create an engine for a parameter set, rejecting invalid input up front
    pub fn new(params: ParameterSet) -> ModelResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Run the full projection
    pub fn run(&self) -> ProjectionResult {
        let p = &self.params;
        log::debug!("Projecting {} months: {:?}", p.months, p);

        // Acquisition is flat over the horizon
        let gross_adds = vec![p.monthly_gross_adds(); p.months as usize];

        // Sequential stage: the in-force base depends on every prior month
        let subscribers = project_subscribers(&gross_adds, p.churn_rate());

        // Per-month stage
        let opex = p.opex_k * 1_000.0;
        let marketing = p.marketing_k * 1_000.0;
        let mut rows: Vec<MonthlyRow> = gross_adds
            .iter()
            .zip(&subscribers)
            .enumerate()
            .map(|(idx, (&adds, &subs))| {
                let revenue = subs * p.arpu;
                let wholesale = subs * p.wholesale_fee;
                let ebit = revenue - (wholesale + opex + marketing);
                // No credit on losses
                let tax = ebit.max(0.0) * p.tax_rate;

                MonthlyRow {
                    month: idx as u32 + 1,
                    gross_adds: adds,
                    subscribers: subs,
                    revenue,
                    wholesale,
                    opex,
                    marketing,
                    ebit,
                    tax,
                    cash: ebit - tax,
                    cum_cash: 0.0,
                }
            })
            .collect();

        let cash: Vec<f64> = rows.iter().map(|r| r.cash).collect();
        let cum_cash = metrics::cumulative_sum(&cash);
        for (row, &cum) in rows.iter_mut().zip(&cum_cash) {
            row.cum_cash = cum;
        }

        let summary = Summary {
            payback_months: metrics::payback_month(&cum_cash),
            npv: metrics::npv(&cash, p.discount_rate),
            peak_cash_need: metrics::peak_cash_need(&cum_cash),
            sub_count_end: metrics::sub_count_end(&subscribers),
        };

        log::debug!(
            "Projection done: payback={:?} npv={:.2} peak_need={:.2} subs_end={}",
            summary.payback_months,
            summary.npv,
            summary.peak_cash_need,
            summary.sub_count_end
        );

        ProjectionResult { rows, summary }
    }
}

/// Validate and project a parameter set in one call
pub fn run_model(params: &ParameterSet) -> ModelResult<ProjectionResult> {
    Ok(ProjectionEngine::new(params.clone())?.run())
}
