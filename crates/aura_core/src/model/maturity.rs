//! Maturity curve
//!
//! Adoption moves through four stages. The first three hold a fixed value
//! multiplier; the optimized stage compounds a monthly learning rate on top
//! of its base multiplier, capped at [`MAX_MATURITY_MULTIPLIER`].

use serde::{Deserialize, Serialize};

/// Ceiling on the optimized-stage multiplier
pub const MAX_MATURITY_MULTIPLIER: f64 = 1.8;

/// AI agent maturity stages, in adoption order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityStage {
    Pilot,
    Proven,
    Scaled,
    Optimized,
}

impl MaturityStage {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MaturityStage::Pilot => "Pilot",
            MaturityStage::Proven => "Proven",
            MaturityStage::Scaled => "Scaled",
            MaturityStage::Optimized => "Optimized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaturityConfig {
    pub pilot_duration_months: u32,
    pub proven_duration_months: u32,
    pub scaled_duration_months: u32,
    /// Monthly compounding improvement applied in the optimized stage
    pub learning_rate: f64,
    pub pilot_multiplier: f64,
    pub proven_multiplier: f64,
    pub scaled_multiplier: f64,
    pub optimized_multiplier: f64,
}

impl Default for MaturityConfig {
    fn default() -> Self {
        Self {
            pilot_duration_months: 3,
            proven_duration_months: 6,
            scaled_duration_months: 9,
            learning_rate: 0.02,
            pilot_multiplier: 0.3,
            proven_multiplier: 0.7,
            scaled_multiplier: 1.0,
            optimized_multiplier: 1.3,
        }
    }
}

impl MaturityConfig {
    // Boundaries saturate so very long stages simply never end
    fn proven_end(&self) -> u32 {
        self.pilot_duration_months.saturating_add(self.proven_duration_months)
    }

    fn scaled_end(&self) -> u32 {
        self.proven_end().saturating_add(self.scaled_duration_months)
    }

    /// Stage for a 1-indexed month
    #[must_use]
    pub fn stage_at_month(&self, month: u32) -> MaturityStage {
        if month <= self.pilot_duration_months {
            MaturityStage::Pilot
        } else if month <= self.proven_end() {
            MaturityStage::Proven
        } else if month <= self.scaled_end() {
            MaturityStage::Scaled
        } else {
            MaturityStage::Optimized
        }
    }

    /// Value multiplier for a 1-indexed month
    #[must_use]
    pub fn multiplier_at_month(&self, month: u32) -> f64 {
        match self.stage_at_month(month) {
            MaturityStage::Pilot => self.pilot_multiplier,
            MaturityStage::Proven => self.proven_multiplier,
            MaturityStage::Scaled => self.scaled_multiplier,
            MaturityStage::Optimized => {
                let months_optimized = month - self.scaled_end();
                let growth = (1.0 + self.learning_rate).powf(f64::from(months_optimized));
                (self.optimized_multiplier * growth).min(MAX_MATURITY_MULTIPLIER)
            }
        }
    }
}
