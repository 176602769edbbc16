//! Parameters for the optional value dimensions.
//!
//! A project without one of these configs simply gets no value from that
//! dimension.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError, ensure_non_negative, ensure_unit_range};

const MONTHS_PER_YEAR: f64 = 12.0;

fn default_utilization_rate() -> f64 {
    0.85
}

fn default_capacity_unit() -> String {
    "units".to_string()
}

fn default_time_sensitivity() -> f64 {
    1.0
}

fn default_probability_factor() -> f64 {
    0.5
}

/// Throughput Amplification parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputConfig {
    pub old_capacity: f64,
    pub new_capacity: f64,
    pub value_per_unit: f64,
    /// Expected utilization of the new capacity, in `[0, 1]`
    #[serde(default = "default_utilization_rate")]
    pub utilization_rate: f64,
    /// Label only, e.g. "transactions/day"
    #[serde(default = "default_capacity_unit")]
    pub capacity_unit: String,
}

impl ThroughputConfig {
    #[must_use]
    pub fn new(old_capacity: f64, new_capacity: f64, value_per_unit: f64) -> Self {
        Self {
            old_capacity,
            new_capacity,
            value_per_unit,
            utilization_rate: default_utilization_rate(),
            capacity_unit: default_capacity_unit(),
        }
    }

    #[must_use]
    pub fn with_utilization_rate(mut self, rate: f64) -> Self {
        self.utilization_rate = rate;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("throughput config", "old_capacity", self.old_capacity)?;
        ensure_non_negative("throughput config", "new_capacity", self.new_capacity)?;
        ensure_unit_range("throughput config", "utilization_rate", self.utilization_rate)
    }

    /// Monthly value of added capacity. A capacity decrease is worth nothing, not a loss.
    #[must_use]
    pub fn monthly_value(&self) -> f64 {
        let capacity_increase = self.new_capacity - self.old_capacity;
        if capacity_increase <= 0.0 {
            return 0.0;
        }
        capacity_increase * self.value_per_unit * self.utilization_rate
    }
}

/// Latency Value parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub transactions_per_month: f64,
    pub old_time_hours: f64,
    pub new_time_hours: f64,
    pub value_per_hour_saved: f64,
    /// Multiplier for time-critical processes
    #[serde(default = "default_time_sensitivity")]
    pub time_sensitivity_factor: f64,
}

impl LatencyConfig {
    #[must_use]
    pub fn new(
        transactions_per_month: f64,
        old_time_hours: f64,
        new_time_hours: f64,
        value_per_hour_saved: f64,
    ) -> Self {
        Self {
            transactions_per_month,
            old_time_hours,
            new_time_hours,
            value_per_hour_saved,
            time_sensitivity_factor: default_time_sensitivity(),
        }
    }

    #[must_use]
    pub fn with_time_sensitivity(mut self, factor: f64) -> Self {
        self.time_sensitivity_factor = factor;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("latency config", "old_time_hours", self.old_time_hours)?;
        ensure_non_negative("latency config", "new_time_hours", self.new_time_hours)?;
        if self.new_time_hours > self.old_time_hours {
            return Err(ValidationError::LatencyRegression {
                old_time_hours: self.old_time_hours,
                new_time_hours: self.new_time_hours,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn time_saved_hours(&self) -> f64 {
        self.old_time_hours - self.new_time_hours
    }

    #[must_use]
    pub fn monthly_value(&self) -> f64 {
        let time_saved = self.time_saved_hours();
        if time_saved <= 0.0 {
            return 0.0;
        }
        self.transactions_per_month
            * time_saved
            * self.value_per_hour_saved
            * self.time_sensitivity_factor
    }
}

/// Optionality & Learning Value parameters. Values are annual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalityConfig {
    #[serde(default)]
    pub process_insights_value: f64,
    #[serde(default)]
    pub data_asset_value: f64,
    #[serde(default)]
    pub capability_options_value: f64,
    /// Likelihood of realizing the strategic value, in `[0, 1]`
    #[serde(default = "default_probability_factor")]
    pub probability_factor: f64,
}

impl Default for OptionalityConfig {
    fn default() -> Self {
        Self {
            process_insights_value: 0.0,
            data_asset_value: 0.0,
            capability_options_value: 0.0,
            probability_factor: default_probability_factor(),
        }
    }
}

impl OptionalityConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_unit_range(
            "optionality config",
            "probability_factor",
            self.probability_factor,
        )
    }

    #[must_use]
    pub fn annual_value(&self) -> f64 {
        self.process_insights_value + self.data_asset_value + self.capability_options_value
    }

    /// Annual strategic value spread across months and weighted by its probability
    #[must_use]
    pub fn monthly_value(&self) -> f64 {
        self.annual_value() / MONTHS_PER_YEAR * self.probability_factor
    }
}
