//! Projection engine: subscriber base, P&L, cash and valuation metrics

mod state;
mod engine;
mod cashflows;
pub mod metrics;

pub use state::{ProjectionState, project_subscribers};
pub use engine::{ProjectionEngine, run_model};
pub use cashflows::{MonthlyRow, ProjectionResult, Summary};
