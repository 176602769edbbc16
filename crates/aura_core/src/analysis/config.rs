//! Configuration types for sensitivity and what-if sweeps.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::Project;
use crate::error::ParseParameterError;

/// Project parameter that a sweep can rescale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityParameter {
    /// Every task's accuracy, capped at 1.0
    Accuracy,
    /// Every task's hourly rate
    HourlyRate,
    /// Every task's weekly hours
    HoursPerWeek,
    /// Initial development, platform and maintenance costs in a sensitivity
    /// sweep; only initial development and platform costs in a scenario
    Cost,
    /// The annual discount rate
    DiscountRate,
}

impl SensitivityParameter {
    pub const ALL: [SensitivityParameter; 5] = [
        SensitivityParameter::Accuracy,
        SensitivityParameter::HourlyRate,
        SensitivityParameter::HoursPerWeek,
        SensitivityParameter::Cost,
        SensitivityParameter::DiscountRate,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SensitivityParameter::Accuracy => "accuracy",
            SensitivityParameter::HourlyRate => "hourly_rate",
            SensitivityParameter::HoursPerWeek => "hours_per_week",
            SensitivityParameter::Cost => "cost",
            SensitivityParameter::DiscountRate => "discount_rate",
        }
    }

    /// Human-readable name for reports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SensitivityParameter::Accuracy => "Agent Accuracy",
            SensitivityParameter::HourlyRate => "Hourly Rate",
            SensitivityParameter::HoursPerWeek => "Hours per Week",
            SensitivityParameter::Cost => "Implementation Cost",
            SensitivityParameter::DiscountRate => "Discount Rate",
        }
    }

    /// Rescale this parameter in place
    pub fn apply(self, project: &mut Project, multiplier: f64) {
        match self {
            SensitivityParameter::Accuracy => {
                for task in &mut project.tasks {
                    task.accuracy = (task.accuracy * multiplier).min(1.0);
                }
            }
            SensitivityParameter::HourlyRate => {
                for task in &mut project.tasks {
                    task.hourly_rate *= multiplier;
                }
            }
            SensitivityParameter::HoursPerWeek => {
                for task in &mut project.tasks {
                    task.hours_per_week *= multiplier;
                }
            }
            SensitivityParameter::Cost => {
                let costs = &mut project.costs;
                costs.initial_development *= multiplier;
                costs.platform_monthly *= multiplier;
                costs.maintenance_monthly *= multiplier;
            }
            SensitivityParameter::DiscountRate => {
                project.discount_rate *= multiplier;
            }
        }
    }
}

impl fmt::Display for SensitivityParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensitivityParameter {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseParameterError(s.to_string()))
    }
}

fn default_scenario_name() -> String {
    "Unnamed".to_string()
}

/// A named set of parameter multipliers applied together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_scenario_name")]
    pub name: String,
    #[serde(default)]
    pub modifications: FxHashMap<SensitivityParameter, f64>,
}

impl Scenario {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifications: FxHashMap::default(),
        }
    }

    /// Add or replace the multiplier for a parameter
    #[must_use]
    pub fn with(mut self, parameter: SensitivityParameter, multiplier: f64) -> Self {
        self.modifications.insert(parameter, multiplier);
        self
    }

    /// Apply every modification to a project in place.
    ///
    /// Each parameter touches a disjoint set of fields, so application order
    /// does not affect the result. A scenario's `cost` leaves maintenance alone.
    pub fn apply(&self, project: &mut Project) {
        for (parameter, multiplier) in &self.modifications {
            match parameter {
                SensitivityParameter::Cost => {
                    project.costs.initial_development *= multiplier;
                    project.costs.platform_monthly *= multiplier;
                }
                other => other.apply(project, *multiplier),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    #[test]
    fn test_parse_names() {
        for parameter in SensitivityParameter::ALL {
            assert_eq!(parameter.as_str().parse(), Ok(parameter));
        }
        assert_eq!(
            "latency".parse::<SensitivityParameter>(),
            Err(ParseParameterError("latency".to_string()))
        );
    }

    #[test]
    fn test_accuracy_is_capped() {
        let mut project = Project::new("Cap");
        project.add_task(Task::new("A", 10.0, 10.0).with_accuracy(0.95));
        SensitivityParameter::Accuracy.apply(&mut project, 1.2);
        assert_eq!(project.tasks[0].accuracy, 1.0);
    }

    #[test]
    fn test_cost_scales_three_fields() {
        let mut project = Project::new("Cost");
        project.costs.initial_development = 100.0;
        project.costs.platform_monthly = 10.0;
        project.costs.maintenance_monthly = 5.0;
        project.costs.training_initial = 50.0;
        SensitivityParameter::Cost.apply(&mut project, 2.0);
        assert_eq!(project.costs.initial_development, 200.0);
        assert_eq!(project.costs.platform_monthly, 20.0);
        assert_eq!(project.costs.maintenance_monthly, 10.0);
        assert_eq!(project.costs.training_initial, 50.0);
    }

    #[test]
    fn test_scenario_cost_skips_maintenance() {
        let mut project = Project::new("Cost");
        project.costs.initial_development = 100.0;
        project.costs.platform_monthly = 10.0;
        project.costs.maintenance_monthly = 5.0;
        Scenario::new("Overrun")
            .with(SensitivityParameter::Cost, 2.0)
            .apply(&mut project);
        assert_eq!(project.costs.initial_development, 200.0);
        assert_eq!(project.costs.platform_monthly, 20.0);
        assert_eq!(project.costs.maintenance_monthly, 5.0);
    }

    #[test]
    fn test_scenario_from_json() {
        let json = r#"{"modifications": {"accuracy": 1.1, "cost": 0.8}}"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.name, "Unnamed");
        assert_eq!(
            scenario.modifications.get(&SensitivityParameter::Cost),
            Some(&0.8)
        );
    }
}
