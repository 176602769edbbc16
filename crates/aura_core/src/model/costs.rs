use serde::{Deserialize, Serialize};

/// Complete cost structure for an AI agent project.
///
/// One-time fields are paid in month 1; recurring fields every month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostStructure {
    pub initial_development: f64,
    pub platform_monthly: f64,
    pub api_cost_per_call: f64,
    pub estimated_calls_per_month: f64,
    pub maintenance_monthly: f64,
    pub training_initial: f64,
    pub training_ongoing_monthly: f64,
    pub change_management: f64,
}

impl CostStructure {
    /// Total one-time costs
    #[must_use]
    pub fn total_initial(&self) -> f64 {
        self.initial_development + self.training_initial + self.change_management
    }

    /// Total recurring monthly costs, including usage-based API spend
    #[must_use]
    pub fn total_monthly(&self) -> f64 {
        let api_monthly = self.api_cost_per_call * self.estimated_calls_per_month;
        self.platform_monthly + api_monthly + self.maintenance_monthly + self.training_ongoing_monthly
    }

    #[must_use]
    pub fn total_cost_over_period(&self, months: u32) -> f64 {
        self.total_initial() + self.total_monthly() * f64::from(months)
    }

    /// Names of any fields holding a negative amount.
    ///
    /// Costs are not range-checked during validation; callers log these instead.
    #[must_use]
    pub fn negative_fields(&self) -> Vec<&'static str> {
        [
            ("initial_development", self.initial_development),
            ("platform_monthly", self.platform_monthly),
            ("api_cost_per_call", self.api_cost_per_call),
            ("estimated_calls_per_month", self.estimated_calls_per_month),
            ("maintenance_monthly", self.maintenance_monthly),
            ("training_initial", self.training_initial),
            ("training_ongoing_monthly", self.training_ongoing_monthly),
            ("change_management", self.change_management),
        ]
        .into_iter()
        .filter(|(_, value)| *value < 0.0)
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let costs = CostStructure {
            initial_development: 50_000.0,
            training_initial: 5_000.0,
            change_management: 2_500.0,
            platform_monthly: 2_000.0,
            api_cost_per_call: 0.01,
            estimated_calls_per_month: 100_000.0,
            maintenance_monthly: 500.0,
            training_ongoing_monthly: 250.0,
        };
        assert_eq!(costs.total_initial(), 57_500.0);
        assert!((costs.total_monthly() - 3_750.0).abs() < 1e-9);
        assert!((costs.total_cost_over_period(12) - (57_500.0 + 45_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_negative_fields_reported() {
        let costs = CostStructure {
            platform_monthly: -10.0,
            ..Default::default()
        };
        assert_eq!(costs.negative_fields(), vec!["platform_monthly"]);
        assert!(CostStructure::default().negative_fields().is_empty());
    }
}
