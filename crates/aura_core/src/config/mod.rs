//! Project configuration
//!
//! `Project` is the aggregate root handed to the calculator. It owns every
//! task and child config, and is read-only for the duration of a calculation.
//!
//! # Builder
//!
//! ```ignore
//! use aura_core::config::ProjectBuilder;
//! use aura_core::model::{CostStructure, Task};
//!
//! let project = ProjectBuilder::new("Customer Service Agent")
//!     .duration_months(24)
//!     .task(Task::new("Email Response", 40.0, 35.0).with_accuracy(0.92))
//!     .costs(CostStructure {
//!         initial_development: 50_000.0,
//!         platform_monthly: 2_000.0,
//!         ..Default::default()
//!     })
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::model::{
    CostStructure, Industry, LatencyConfig, MaturityConfig, OptionalityConfig, RiskProfile, Task,
    ThroughputConfig,
};

pub mod builder;

pub use builder::ProjectBuilder;

fn default_duration_months() -> u32 {
    24
}

fn default_discount_rate() -> f64 {
    0.10
}

/// Complete project definition for AURA analysis
///
/// **What the agent does**: `tasks`, plus the optional throughput, latency and
/// optionality configs for the value dimensions that apply.
///
/// **What it costs and how it matures**: `costs`, `risk_profile`,
/// `maturity_config`.
///
/// **How it is valued**: `duration_months` horizon and the annual
/// `discount_rate` used for NPV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default = "default_duration_months")]
    pub duration_months: u32,
    #[serde(default)]
    pub industry: Industry,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub costs: CostStructure,
    #[serde(default)]
    pub risk_profile: RiskProfile,
    #[serde(default)]
    pub maturity_config: MaturityConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput_config: Option<ThroughputConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_config: Option<LatencyConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optionality_config: Option<OptionalityConfig>,
    /// Annual rate used to discount monthly cash flows
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

impl Project {
    /// Create an empty project with default costs, risks and maturity schedule
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration_months: default_duration_months(),
            industry: Industry::default(),
            tasks: Vec::new(),
            costs: CostStructure::default(),
            risk_profile: RiskProfile::default(),
            maturity_config: MaturityConfig::default(),
            throughput_config: None,
            latency_config: None,
            optionality_config: None,
            discount_rate: default_discount_rate(),
        }
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Check every field against its domain, stopping at the first violation.
    /// Negative cost fields are allowed but logged.
    pub fn validate(&self) -> Result<()> {
        self.check_domain()?;
        self.warn_negative_costs();
        Ok(())
    }

    /// Domain checks without logging, for re-checking rescaled snapshots
    pub(crate) fn check_domain(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }
        if self.duration_months == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        for task in &self.tasks {
            task.validate()?;
        }
        self.risk_profile.validate()?;
        if let Some(throughput) = &self.throughput_config {
            throughput.validate()?;
        }
        if let Some(latency) = &self.latency_config {
            latency.validate()?;
        }
        if let Some(optionality) = &self.optionality_config {
            optionality.validate()?;
        }
        Ok(())
    }

    fn warn_negative_costs(&self) {
        let negative = self.costs.negative_fields();
        if !negative.is_empty() {
            tracing::warn!(
                project = %self.name,
                fields = ?negative,
                "Cost structure contains negative amounts"
            );
        }
    }

    /// Total number of hours per week across all tasks
    #[must_use]
    pub fn total_hours_per_week(&self) -> f64 {
        self.tasks.iter().map(|t| t.hours_per_week).sum()
    }
}
