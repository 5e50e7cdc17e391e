//! MVNO Scenario - Subscriber and cash projection engine for telecom resellers
//!
//! This library provides:
//! - A validated parameter set for acquisition, pricing, churn and cost drivers
//! - Baseline documents with named override merging
//! - Month-by-month subscriber recurrence, P&L and cash projection
//! - Payback, NPV and peak funding metrics

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{ModelError, ModelResult};
pub use assumptions::{Override, ParameterMap, ParameterSet};
pub use projection::{run_model, MonthlyRow, ProjectionEngine, ProjectionResult, Summary};
pub use scenario::ScenarioRunner;

/// Engine version, shown by front ends next to results
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
