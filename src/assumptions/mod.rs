//! Scenario assumptions: acquisition, pricing, churn and cost drivers

mod overrides;
pub mod loader;

pub use overrides::{Override, ParameterMap};
pub use loader::{load_baseline, save_baseline, DEFAULT_BASELINE_PATH};

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// Names of every field a baseline must provide, in document order
pub const PARAMETER_NAMES: [&str; 10] = [
    "months",
    "gross_adds_k",
    "marketing_k",
    "cac_eff",
    "arpu",
    "churn_pct",
    "wholesale_fee",
    "opex_k",
    "tax_rate",
    "discount_rate",
];

/// Validated input to a single projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Projection horizon in months
    pub months: u32,

    /// Organic gross adds per month (thousands of subscribers)
    pub gross_adds_k: f64,

    /// Paid marketing spend per month (thousand currency units)
    pub marketing_k: f64,

    /// Paid adds per thousand currency units of marketing
    pub cac_eff: f64,

    /// Revenue per subscriber per month
    pub arpu: f64,

    /// Monthly churn as a percentage of the post-add base
    pub churn_pct: f64,

    /// Variable network cost per subscriber per month
    pub wholesale_fee: f64,

    /// Fixed operating cost per month (thousand currency units)
    pub opex_k: f64,

    /// Tax on positive EBIT only
    pub tax_rate: f64,

    /// Annual discount rate for NPV
    pub discount_rate: f64,
}

impl ParameterSet {
    /// Built-in baseline: five year horizon discounted at 8%
    pub fn default_baseline() -> Self {
        Self {
            months: 60,
            gross_adds_k: 10.0,
            marketing_k: 250.0,
            cac_eff: 20.0,
            arpu: 15.0,
            churn_pct: 2.0,
            wholesale_fee: 6.0,
            opex_k: 400.0,
            tax_rate: 0.25,
            discount_rate: 0.08,
        }
    }

    /// Build a parameter set from a merged parameter map.
    ///
    /// Every name in [`PARAMETER_NAMES`] must be present and numeric. Extra keys are
    /// tolerated but logged, since they may belong to a newer baseline document.
    pub fn from_map(map: &ParameterMap) -> ModelResult<Self> {
        for name in map.names() {
            if !PARAMETER_NAMES.contains(&name) {
                log::warn!("Ignoring baseline key '{}': not a model parameter", name);
            }
        }

        let params = Self {
            months: parse_months(map)?,
            gross_adds_k: parse_real(map, "gross_adds_k")?,
            marketing_k: parse_real(map, "marketing_k")?,
            cac_eff: parse_real(map, "cac_eff")?,
            arpu: parse_real(map, "arpu")?,
            churn_pct: parse_real(map, "churn_pct")?,
            wholesale_fee: parse_real(map, "wholesale_fee")?,
            opex_k: parse_real(map, "opex_k")?,
            tax_rate: parse_real(map, "tax_rate")?,
            discount_rate: parse_real(map, "discount_rate")?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Flatten back into a parameter map (e.g. to persist as a new baseline)
    pub fn to_map(&self) -> ParameterMap {
        let mut map = ParameterMap::new();
        map.insert("months", self.months.to_string());
        for (name, value) in self.real_fields() {
            map.insert(name, value.to_string());
        }
        map
    }

    /// Check ranges; fails on the first offending field
    pub fn validate(&self) -> ModelResult<()> {
        if self.months < 1 {
            return Err(ModelError::invalid("months", "horizon must be at least one month"));
        }

        for (name, value) in self.real_fields() {
            if !value.is_finite() {
                return Err(ModelError::invalid(name, format!("{} is not a finite number", value)));
            }
        }

        for (name, value) in [
            ("gross_adds_k", self.gross_adds_k),
            ("marketing_k", self.marketing_k),
            ("cac_eff", self.cac_eff),
            ("arpu", self.arpu),
            ("wholesale_fee", self.wholesale_fee),
            ("opex_k", self.opex_k),
        ] {
            if value < 0.0 {
                return Err(ModelError::invalid(name, format!("{} must not be negative", value)));
            }
        }

        if !(0.0..=100.0).contains(&self.churn_pct) {
            return Err(ModelError::invalid(
                "churn_pct",
                format!("{} is outside [0, 100]", self.churn_pct),
            ));
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(ModelError::invalid(
                "tax_rate",
                format!("{} is outside [0, 1]", self.tax_rate),
            ));
        }
        if self.discount_rate <= -1.0 {
            return Err(ModelError::invalid(
                "discount_rate",
                format!("{} must be greater than -1", self.discount_rate),
            ));
        }

        Ok(())
    }

    /// Gross adds per month: organic plus marketing-driven
    pub fn monthly_gross_adds(&self) -> f64 {
        self.gross_adds_k * 1_000.0 + self.marketing_k * self.cac_eff
    }

    /// Monthly churn as a fraction
    pub fn churn_rate(&self) -> f64 {
        self.churn_pct / 100.0
    }

    fn real_fields(&self) -> [(&'static str, f64); 9] {
        [
            ("gross_adds_k", self.gross_adds_k),
            ("marketing_k", self.marketing_k),
            ("cac_eff", self.cac_eff),
            ("arpu", self.arpu),
            ("churn_pct", self.churn_pct),
            ("wholesale_fee", self.wholesale_fee),
            ("opex_k", self.opex_k),
            ("tax_rate", self.tax_rate),
            ("discount_rate", self.discount_rate),
        ]
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::default_baseline()
    }
}

fn required<'a>(map: &'a ParameterMap, name: &str) -> ModelResult<&'a str> {
    map.get(name)
        .ok_or_else(|| ModelError::invalid(name, "missing from baseline and overrides"))
}

fn parse_real(map: &ParameterMap, name: &str) -> ModelResult<f64> {
    let raw = required(map, name)?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ModelError::invalid(name, format!("'{}' is not numeric", raw)))
}

/// Months may arrive as "60" or "60.0" (JSON numbers), but must be a whole count
fn parse_months(map: &ParameterMap) -> ModelResult<u32> {
    let value = parse_real(map, "months")?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ModelError::invalid("months", format!("{} is not a whole number of months", value)));
    }
    if value < 1.0 {
        return Err(ModelError::invalid("months", "horizon must be at least one month"));
    }
    if value > u32::MAX as f64 {
        return Err(ModelError::invalid("months", format!("{} is too large", value)));
    }
    Ok(value as u32)
}
