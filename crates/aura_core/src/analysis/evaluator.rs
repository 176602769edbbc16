//! Sweep evaluator - recalculates a project once per sweep point.
//!
//! Every point works on its own clone of the base project, so points are
//! independent and may run on the rayon pool. Results keep input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::calculator::evaluate;
use crate::config::Project;
use crate::error::Result;
use crate::metrics::IrrConfig;
use crate::model::AuraResults;

use super::{Scenario, SensitivityParameter};

/// Recalculate `base` once per multiplier of `parameter`.
///
/// Fails with the first invalid snapshot's error, e.g. when a negative
/// multiplier drives accuracy below zero.
pub fn sensitivity_sweep(
    base: &Project,
    parameter: SensitivityParameter,
    multipliers: &[f64],
    irr_config: &IrrConfig,
) -> Result<Vec<(f64, AuraResults)>> {
    tracing::debug!(
        project = %base.name,
        %parameter,
        points = multipliers.len(),
        "Running sensitivity sweep"
    );

    let run_point = |multiplier: &f64| -> Result<(f64, AuraResults)> {
        let project = apply_parameter(base, parameter, *multiplier)?;
        Ok((*multiplier, evaluate(&project, irr_config)))
    };

    #[cfg(feature = "parallel")]
    let results: Result<Vec<_>> = multipliers.par_iter().map(run_point).collect();

    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<_>> = multipliers.iter().map(run_point).collect();

    if let Err(e) = &results {
        tracing::warn!(%parameter, error = %e, "Sensitivity sweep produced an invalid project");
    }
    results
}

/// Recalculate `base` once per scenario
pub fn what_if(
    base: &Project,
    scenarios: &[Scenario],
    irr_config: &IrrConfig,
) -> Result<Vec<(String, AuraResults)>> {
    tracing::debug!(
        project = %base.name,
        scenarios = scenarios.len(),
        "Running what-if analysis"
    );

    let run_scenario = |scenario: &Scenario| -> Result<(String, AuraResults)> {
        let project = apply_scenario(base, scenario)?;
        Ok((scenario.name.clone(), evaluate(&project, irr_config)))
    };

    #[cfg(feature = "parallel")]
    let results: Result<Vec<_>> = scenarios.par_iter().map(run_scenario).collect();

    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<_>> = scenarios.iter().map(run_scenario).collect();

    if let Err(e) = &results {
        tracing::warn!(error = %e, "What-if scenario produced an invalid project");
    }
    results
}

/// Clone the project with a single parameter rescaled, then re-check its domain
fn apply_parameter(
    base: &Project,
    parameter: SensitivityParameter,
    multiplier: f64,
) -> Result<Project> {
    let mut modified = base.clone();
    parameter.apply(&mut modified, multiplier);
    modified.check_domain()?;
    Ok(modified)
}

fn apply_scenario(base: &Project, scenario: &Scenario) -> Result<Project> {
    let mut modified = base.clone();
    scenario.apply(&mut modified);
    modified.check_domain()?;
    Ok(modified)
}
