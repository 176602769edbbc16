//! Calculator facade
//!
//! Validates a project once, then runs the valuation pipeline:
//! value breakdown → monthly projections → aggregate metrics.

use crate::analysis::{self, Scenario, SensitivityParameter};
use crate::config::Project;
use crate::error::Result;
use crate::metrics::{self, IrrConfig};
use crate::model::{AuraResults, ResultSummary, ValueBreakdown};
use crate::projection::project_months;
use crate::value::value_breakdown;

/// Runs AURA calculations for a validated project
#[derive(Debug, Clone)]
pub struct Calculator {
    project: Project,
    irr_config: IrrConfig,
}

impl Calculator {
    /// Validate the project and wrap it for calculation
    pub fn new(project: Project) -> Result<Self> {
        project.validate()?;
        Ok(Self {
            project,
            irr_config: IrrConfig::default(),
        })
    }

    /// Override the IRR solver parameters
    #[must_use]
    pub fn with_irr_config(mut self, irr_config: IrrConfig) -> Self {
        self.irr_config = irr_config;
        self
    }

    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Base monthly value of each dimension, before maturity and risk
    #[must_use]
    pub fn value_breakdown(&self) -> ValueBreakdown {
        value_breakdown(&self.project)
    }

    #[must_use]
    pub fn calculate(&self) -> AuraResults {
        evaluate(&self.project, &self.irr_config)
    }

    /// Recalculate with one parameter rescaled by each multiplier, in input order
    pub fn sensitivity_analysis(
        &self,
        parameter: SensitivityParameter,
        multipliers: &[f64],
    ) -> Result<Vec<(f64, AuraResults)>> {
        analysis::sensitivity_sweep(&self.project, parameter, multipliers, &self.irr_config)
    }

    /// Recalculate once per scenario, in input order
    pub fn what_if_analysis(&self, scenarios: &[Scenario]) -> Result<Vec<(String, AuraResults)>> {
        analysis::what_if(&self.project, scenarios, &self.irr_config)
    }
}

/// Full calculation for an already-validated project
pub(crate) fn evaluate(project: &Project, irr_config: &IrrConfig) -> AuraResults {
    let breakdown = value_breakdown(project);
    let projections = project_months(project, &breakdown);

    let total_gross_value = projections.iter().map(|p| p.gross_value).sum();
    let total_risk_adjusted_value: f64 = projections.iter().map(|p| p.risk_adjusted_value).sum();
    let total_cost: f64 = projections.iter().map(|p| p.cost).sum();

    let cash_flows: Vec<f64> = projections.iter().map(|p| p.net_value).collect();
    let summary = ResultSummary {
        total_gross_value,
        total_risk_adjusted_value,
        total_cost,
        net_present_value: metrics::net_present_value(&projections, project.discount_rate),
        roi_percentage: metrics::roi_percentage(total_risk_adjusted_value, total_cost),
        payback_months: metrics::payback_period(&projections),
        irr: metrics::internal_rate_of_return(&cash_flows, irr_config),
    };

    tracing::debug!(
        project = %project.name,
        npv = summary.net_present_value,
        roi = summary.roi_percentage,
        "Calculation complete"
    );

    AuraResults {
        project_name: project.name.clone(),
        duration_months: project.duration_months,
        summary,
        value_breakdown: breakdown,
        risk_profile: project.risk_profile.clone(),
        maturity_config: project.maturity_config.clone(),
        discount_rate: project.discount_rate,
        monthly_projections: projections,
    }
}
