//! Monthly projection generator
//!
//! Combines the base value breakdown with the maturity curve, the risk haircut
//! and the cost schedule into one record per month.

use crate::config::Project;
use crate::model::{MonthlyProjection, ValueBreakdown};

/// Generate projections for months `1..=duration_months`.
///
/// Month 1 carries the one-time costs on top of the recurring ones. The
/// cumulative series starts from `-total_initial` before month 1 is added, so
/// the one-time costs are counted twice in `cumulative_net_value`.
#[must_use]
pub fn project_months(project: &Project, base: &ValueBreakdown) -> Vec<MonthlyProjection> {
    let total_initial = project.costs.total_initial();
    let total_monthly = project.costs.total_monthly();
    let risk_factor = project.risk_profile.risk_adjustment_factor();
    let base_total = base.total();

    let mut cumulative_net_value = -total_initial;
    let mut projections = Vec::with_capacity(project.duration_months as usize);

    for month in 1..=project.duration_months {
        let maturity_multiplier = project.maturity_config.multiplier_at_month(month);
        let stage = project.maturity_config.stage_at_month(month);

        let gross_value = base_total * maturity_multiplier;
        let risk_adjusted_value = gross_value * risk_factor;
        let cost = if month == 1 {
            total_initial + total_monthly
        } else {
            total_monthly
        };
        let net_value = risk_adjusted_value - cost;
        cumulative_net_value += net_value;

        projections.push(MonthlyProjection {
            month,
            stage,
            maturity_multiplier,
            gross_value,
            risk_adjusted_value,
            cost,
            net_value,
            cumulative_net_value,
            value_breakdown: base.scaled(maturity_multiplier),
        });
    }

    projections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CostStructure, MaturityStage};

    #[test]
    fn test_first_month_carries_initial_costs() {
        let mut project = Project::new("Costs");
        project.duration_months = 3;
        project.costs = CostStructure {
            initial_development: 1000.0,
            platform_monthly: 100.0,
            ..Default::default()
        };
        let projections = project_months(&project, &ValueBreakdown::default());

        assert_eq!(projections.len(), 3);
        assert_eq!(projections[0].cost, 1100.0);
        assert_eq!(projections[1].cost, 100.0);
        assert_eq!(projections[0].stage, MaturityStage::Pilot);
        // -1000 seed, then -1100, -100, -100
        assert_eq!(projections[2].cumulative_net_value, -2300.0);
    }
}
