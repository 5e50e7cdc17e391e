//! Scenario runner: baseline document plus named overrides
//!
//! Loads the baseline once, then runs any number of projections, each with its
//! own overrides, without re-reading the baseline file.

use crate::assumptions::{load_baseline, Override, ParameterMap, ParameterSet, DEFAULT_BASELINE_PATH};
use crate::error::ModelResult;
use crate::projection::{run_model, ProjectionResult};
use std::path::Path;

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_file(Path::new("data/baseline.csv"))?;
/// let result = runner.run(&[Override::new("arpu", 18.0)])?;
/// println!("payback: {:?}", result.summary.payback_months);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Baseline parameter document; defines which keys may be overridden
    baseline: ParameterMap,
}

impl ScenarioRunner {
    /// Create runner with the built-in baseline
    pub fn new() -> Self {
        Self {
            baseline: ParameterSet::default_baseline().to_map(),
        }
    }

    /// Create runner from the shipped baseline file
    pub fn from_default_file() -> ModelResult<Self> {
        Self::from_file(Path::new(DEFAULT_BASELINE_PATH))
    }

    /// Create runner from a baseline file (CSV or JSON)
    pub fn from_file(path: &Path) -> ModelResult<Self> {
        Ok(Self {
            baseline: load_baseline(path)?,
        })
    }

    /// Create runner with a pre-built baseline document
    pub fn with_baseline(baseline: ParameterMap) -> Self {
        Self { baseline }
    }

    /// Merge overrides onto the baseline and build the validated parameter set
    pub fn parameters(&self, overrides: &[Override]) -> ModelResult<ParameterSet> {
        let merged = self.baseline.apply_overrides(overrides)?;
        ParameterSet::from_map(&merged)
    }

    /// Run one scenario
    pub fn run(&self, overrides: &[Override]) -> ModelResult<ProjectionResult> {
        let params = self.parameters(overrides)?;
        run_model(&params)
    }

    pub fn baseline(&self) -> &ParameterMap {
        &self.baseline
    }

    pub fn baseline_mut(&mut self) -> &mut ParameterMap {
        &mut self.baseline
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
