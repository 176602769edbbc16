//! Project Builder
//!
//! Fluent construction of a validated [`Project`].

use super::Project;
use crate::error::Result;
use crate::model::{
    CostStructure, Industry, LatencyConfig, MaturityConfig, OptionalityConfig, RiskProfile, Task,
    ThroughputConfig,
};

/// Builder for creating projects; `build()` runs the same validation as the calculator
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            project: Project::new(name),
        }
    }

    // =========================================================================
    // Basic Configuration
    // =========================================================================

    /// Set the projection horizon in months
    #[must_use]
    pub fn duration_months(mut self, months: u32) -> Self {
        self.project.duration_months = months;
        self
    }

    #[must_use]
    pub fn industry(mut self, industry: Industry) -> Self {
        self.project.industry = industry;
        self
    }

    /// Set the annual discount rate used for NPV
    #[must_use]
    pub fn discount_rate(mut self, rate: f64) -> Self {
        self.project.discount_rate = rate;
        self
    }

    // =========================================================================
    // Tasks and Costs
    // =========================================================================

    /// Append a task; may be called repeatedly
    #[must_use]
    pub fn task(mut self, task: Task) -> Self {
        self.project.tasks.push(task);
        self
    }

    #[must_use]
    pub fn tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.project.tasks.extend(tasks);
        self
    }

    #[must_use]
    pub fn costs(mut self, costs: CostStructure) -> Self {
        self.project.costs = costs;
        self
    }

    // =========================================================================
    // Risk and Maturity
    // =========================================================================

    #[must_use]
    pub fn risk_profile(mut self, risk: RiskProfile) -> Self {
        self.project.risk_profile = risk;
        self
    }

    #[must_use]
    pub fn maturity(mut self, maturity: MaturityConfig) -> Self {
        self.project.maturity_config = maturity;
        self
    }

    // =========================================================================
    // Optional Value Dimensions
    // =========================================================================

    #[must_use]
    pub fn throughput(mut self, config: ThroughputConfig) -> Self {
        self.project.throughput_config = Some(config);
        self
    }

    #[must_use]
    pub fn latency(mut self, config: LatencyConfig) -> Self {
        self.project.latency_config = Some(config);
        self
    }

    #[must_use]
    pub fn optionality(mut self, config: OptionalityConfig) -> Self {
        self.project.optionality_config = Some(config);
        self
    }

    /// Validate and return the project
    pub fn build(self) -> Result<Project> {
        self.project.check_domain()?;
        Ok(self.project)
    }
}
