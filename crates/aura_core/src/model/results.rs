//! Calculation outputs
//!
//! Everything here is produced by the calculator and never mutated afterwards.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::maturity::{MaturityConfig, MaturityStage};
use super::risk::RiskProfile;

/// Monthly value split across the five value dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ValueBreakdown {
    /// Direct Labour Arbitrage
    #[serde(default)]
    pub dla: f64,
    /// Throughput Amplification
    #[serde(default)]
    pub ta: f64,
    /// Decision Quality Premium
    #[serde(default)]
    pub dqp: f64,
    /// Latency Value
    #[serde(default)]
    pub lv: f64,
    /// Optionality & Learning Value
    #[serde(default)]
    pub olv: f64,
}

impl ValueBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.dla + self.ta + self.dqp + self.lv + self.olv
    }

    /// Every dimension multiplied by the same factor
    #[must_use]
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            dla: self.dla * multiplier,
            ta: self.ta * multiplier,
            dqp: self.dqp * multiplier,
            lv: self.lv * multiplier,
            olv: self.olv * multiplier,
        }
    }

    /// `(label, value)` pairs in presentation order
    #[must_use]
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        [
            ("Direct Labour Arbitrage", self.dla),
            ("Throughput Amplification", self.ta),
            ("Decision Quality Premium", self.dqp),
            ("Latency Value", self.lv),
            ("Optionality & Learning", self.olv),
        ]
    }
}

impl Serialize for ValueBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValueBreakdown", 6)?;
        state.serialize_field("dla", &self.dla)?;
        state.serialize_field("ta", &self.ta)?;
        state.serialize_field("dqp", &self.dqp)?;
        state.serialize_field("lv", &self.lv)?;
        state.serialize_field("olv", &self.olv)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

/// Projection for a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// 1-indexed month
    pub month: u32,
    pub stage: MaturityStage,
    pub maturity_multiplier: f64,
    pub gross_value: f64,
    pub risk_adjusted_value: f64,
    pub cost: f64,
    pub net_value: f64,
    pub cumulative_net_value: f64,
    /// Base breakdown scaled by this month's maturity multiplier
    pub value_breakdown: ValueBreakdown,
}

/// Aggregate financial metrics for a calculation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub total_gross_value: f64,
    pub total_risk_adjusted_value: f64,
    pub total_cost: f64,
    pub net_present_value: f64,
    pub roi_percentage: f64,
    /// `None` when the project never breaks even within the horizon
    pub payback_months: Option<f64>,
    /// Annual IRR as a percentage; `None` when it cannot be computed
    pub irr: Option<f64>,
}

/// Complete results from an AURA ROI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuraResults {
    pub project_name: String,
    pub duration_months: u32,
    pub summary: ResultSummary,
    /// Base monthly values before maturity and risk adjustment
    pub value_breakdown: ValueBreakdown,
    pub risk_profile: RiskProfile,
    pub maturity_config: MaturityConfig,
    pub discount_rate: f64,
    pub monthly_projections: Vec<MonthlyProjection>,
}

impl AuraResults {
    #[must_use]
    pub fn net_present_value(&self) -> f64 {
        self.summary.net_present_value
    }

    #[must_use]
    pub fn roi_percentage(&self) -> f64 {
        self.summary.roi_percentage
    }

    #[must_use]
    pub fn payback_months(&self) -> Option<f64> {
        self.summary.payback_months
    }

    #[must_use]
    pub fn irr(&self) -> Option<f64> {
        self.summary.irr
    }

    /// Net value of each month, in order
    #[must_use]
    pub fn cash_flows(&self) -> Vec<f64> {
        self.monthly_projections.iter().map(|p| p.net_value).collect()
    }

    /// Projection for a 1-indexed month
    #[must_use]
    pub fn month(&self, month: u32) -> Option<&MonthlyProjection> {
        self.monthly_projections.iter().find(|p| p.month == month)
    }
}
