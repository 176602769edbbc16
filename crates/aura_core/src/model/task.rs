//! Automatable tasks
//!
//! A task is the unit of work an agent takes over. Its labour figures drive
//! Direct Labour Arbitrage and, when error data is present, the Decision
//! Quality Premium.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ensure_non_negative, ensure_unit_range};

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;

fn default_accuracy() -> f64 {
    0.90
}

fn default_oversight_rate() -> f64 {
    0.10
}

/// A task that an AI agent will perform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub hours_per_week: f64,
    /// Loaded hourly cost (salary + benefits + overhead)
    pub hourly_rate: f64,
    /// Agent accuracy rate in `[0, 1]`
    #[serde(default = "default_accuracy")]
    pub accuracy: f64,
    /// Share of outputs requiring human review, in `[0, 1]`
    #[serde(default = "default_oversight_rate")]
    pub oversight_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_per_week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_per_task_minutes: Option<f64>,
    /// Cost incurred each time the task is done incorrectly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_cost: Option<f64>,
    /// Human error rate without the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_error_rate: Option<f64>,
}

impl Task {
    /// Create a task with the default accuracy (0.90) and oversight rate (0.10)
    #[must_use]
    pub fn new(name: impl Into<String>, hours_per_week: f64, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            hours_per_week,
            hourly_rate,
            accuracy: default_accuracy(),
            oversight_rate: default_oversight_rate(),
            volume_per_week: None,
            time_per_task_minutes: None,
            error_cost: None,
            baseline_error_rate: None,
        }
    }

    #[must_use]
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn with_oversight_rate(mut self, oversight_rate: f64) -> Self {
        self.oversight_rate = oversight_rate;
        self
    }

    #[must_use]
    pub fn with_volume_per_week(mut self, volume: u32) -> Self {
        self.volume_per_week = Some(volume);
        self
    }

    #[must_use]
    pub fn with_time_per_task_minutes(mut self, minutes: f64) -> Self {
        self.time_per_task_minutes = Some(minutes);
        self
    }

    /// Attach the error economics used by the Decision Quality Premium
    #[must_use]
    pub fn with_error_profile(mut self, error_cost: f64, baseline_error_rate: f64) -> Self {
        self.error_cost = Some(error_cost);
        self.baseline_error_rate = Some(baseline_error_rate);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let entity = format!("task '{}'", self.name);
        ensure_non_negative(&entity, "hours_per_week", self.hours_per_week)?;
        ensure_non_negative(&entity, "hourly_rate", self.hourly_rate)?;
        ensure_unit_range(&entity, "accuracy", self.accuracy)?;
        ensure_unit_range(&entity, "oversight_rate", self.oversight_rate)?;
        Ok(())
    }

    /// Fraction of the task's output that is both correct and unreviewed
    #[must_use]
    pub fn effective_accuracy(&self) -> f64 {
        self.accuracy * (1.0 - self.oversight_rate)
    }

    /// Monthly labour cost displaced by the agent
    #[must_use]
    pub fn monthly_labour_value(&self) -> f64 {
        self.hours_per_week * WEEKS_PER_MONTH * self.hourly_rate * self.effective_accuracy()
    }

    /// Decisions made per month.
    ///
    /// Uses the weekly volume when known, otherwise estimates from hours and
    /// minutes per instance. `None` when neither is available.
    #[must_use]
    pub fn decisions_per_month(&self) -> Option<f64> {
        if let Some(volume) = self.volume_per_week.filter(|v| *v > 0) {
            return Some(f64::from(volume) * WEEKS_PER_MONTH);
        }
        self.time_per_task_minutes
            .filter(|minutes| *minutes != 0.0)
            .map(|minutes| self.hours_per_week * 60.0 / minutes * WEEKS_PER_MONTH)
    }

    /// Reduction in error rate versus the human baseline, floored at zero
    #[must_use]
    pub fn error_reduction(&self, baseline_error_rate: f64) -> f64 {
        let agent_error_rate = 1.0 - self.accuracy;
        (baseline_error_rate - agent_error_rate).max(0.0)
    }

    /// Monthly value of avoided errors, or `None` if the task carries no error data
    #[must_use]
    pub fn monthly_error_savings(&self) -> Option<f64> {
        let error_cost = self.error_cost.filter(|c| *c != 0.0)?;
        let baseline = self.baseline_error_rate.filter(|r| *r != 0.0)?;
        let decisions = self.decisions_per_month()?;
        Some(decisions * self.error_reduction(baseline) * error_cost)
    }
}
