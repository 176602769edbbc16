//! Financial metrics reduced from a monthly projection series
//!
//! NPV by discounted cash flow, payback by linear interpolation of the
//! cumulative series, IRR by Newton-Raphson on the monthly net flows.

use crate::model::MonthlyProjection;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Newton-Raphson parameters for the IRR solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrConfig {
    pub max_iterations: u32,
    /// Applied to both the derivative magnitude and the step size
    pub tolerance: f64,
    /// Starting guess, converted to a monthly rate before iterating
    pub initial_annual_rate: f64,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
            initial_annual_rate: 0.10,
        }
    }
}

/// Net present value of the monthly net values, discounting month `m` by
/// `(1 + annual_rate / 12)^m`
#[must_use]
pub fn net_present_value(projections: &[MonthlyProjection], annual_rate: f64) -> f64 {
    let monthly_rate = annual_rate / MONTHS_PER_YEAR;
    projections
        .iter()
        .map(|p| p.net_value / (1.0 + monthly_rate).powi(p.month as i32))
        .sum()
}

/// Months until the cumulative net value first reaches zero, interpolated
/// between the two straddling months. `None` if it never does.
#[must_use]
pub fn payback_period(projections: &[MonthlyProjection]) -> Option<f64> {
    let idx = projections
        .iter()
        .position(|p| p.cumulative_net_value >= 0.0)?;
    let current = &projections[idx];
    if idx == 0 {
        return Some(f64::from(current.month));
    }

    let prev = &projections[idx - 1];
    let value_change = current.cumulative_net_value - prev.cumulative_net_value;
    if value_change == 0.0 {
        return Some(f64::from(current.month));
    }
    Some(f64::from(prev.month) + (-prev.cumulative_net_value) / value_change)
}

/// Annualised internal rate of return as a percentage.
///
/// `cash_flows[0]` is month 1. Returns `None` when the flows never change
/// sign, when the derivative vanishes, when a step is not finite, or when the
/// solver does not converge within `config.max_iterations`.
#[must_use]
pub fn internal_rate_of_return(cash_flows: &[f64], config: &IrrConfig) -> Option<f64> {
    if cash_flows.iter().all(|cf| *cf >= 0.0) || cash_flows.iter().all(|cf| *cf <= 0.0) {
        return None;
    }

    let mut rate = config.initial_annual_rate / MONTHS_PER_YEAR;

    for _ in 0..config.max_iterations {
        let mut npv = 0.0;
        let mut derivative = 0.0;
        for (t, cf) in cash_flows.iter().enumerate() {
            let t = (t + 1) as f64;
            let discount = (1.0 + rate).powf(t);
            npv += cf / discount;
            derivative -= t * cf / (discount * (1.0 + rate));
        }

        if derivative.abs() < config.tolerance {
            tracing::debug!(rate, "IRR derivative vanished");
            return None;
        }

        let new_rate = rate - npv / derivative;
        if !new_rate.is_finite() {
            tracing::debug!(rate, "IRR step diverged");
            return None;
        }
        if (new_rate - rate).abs() < config.tolerance {
            let annual = (1.0 + new_rate).powf(MONTHS_PER_YEAR) - 1.0;
            return Some(annual * 100.0);
        }
        rate = new_rate;
    }

    tracing::debug!(
        iterations = config.max_iterations,
        "IRR did not converge"
    );
    None
}

/// Return on investment as a percentage; zero when there is no positive cost
#[must_use]
pub fn roi_percentage(value: f64, cost: f64) -> f64 {
    if cost > 0.0 {
        (value - cost) / cost * 100.0
    } else {
        0.0
    }
}
