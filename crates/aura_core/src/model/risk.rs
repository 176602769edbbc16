//! Risk model
//!
//! Four independent risk scores collapse into a single composite, which is
//! applied to every projected month as a constant haircut.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Result, ensure_unit_range};

const TECHNICAL_WEIGHT: f64 = 0.35;
const ADOPTION_WEIGHT: f64 = 0.35;
const REGULATORY_WEIGHT: f64 = 0.15;
const VENDOR_WEIGHT: f64 = 0.15;

/// Risk assessment for a project. Each score runs from 0.0 (none) to 1.0 (maximum).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskProfile {
    /// Model degradation, hallucinations, integration failures
    pub technical_risk: f64,
    /// User resistance, training gaps, change management
    pub adoption_risk: f64,
    /// Compliance changes, explainability requirements
    pub regulatory_risk: f64,
    /// Platform changes, pricing shifts, API deprecation
    pub vendor_risk: f64,
}

impl Default for RiskProfile {
    fn default() -> Self {
        Self {
            technical_risk: 0.10,
            adoption_risk: 0.15,
            regulatory_risk: 0.05,
            vendor_risk: 0.05,
        }
    }
}

impl RiskProfile {
    /// Create a validated risk profile
    pub fn new(
        technical_risk: f64,
        adoption_risk: f64,
        regulatory_risk: f64,
        vendor_risk: f64,
    ) -> Result<Self> {
        let profile = Self {
            technical_risk,
            adoption_risk,
            regulatory_risk,
            vendor_risk,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_unit_range("risk profile", "technical_risk", self.technical_risk)?;
        ensure_unit_range("risk profile", "adoption_risk", self.adoption_risk)?;
        ensure_unit_range("risk profile", "regulatory_risk", self.regulatory_risk)?;
        ensure_unit_range("risk profile", "vendor_risk", self.vendor_risk)?;
        Ok(())
    }

    /// Weighted composite; technical and adoption risk dominate
    #[must_use]
    pub fn composite_risk(&self) -> f64 {
        TECHNICAL_WEIGHT * self.technical_risk
            + ADOPTION_WEIGHT * self.adoption_risk
            + REGULATORY_WEIGHT * self.regulatory_risk
            + VENDOR_WEIGHT * self.vendor_risk
    }

    /// Multiplier in `[0, 1]` applied to gross value
    #[must_use]
    pub fn risk_adjustment_factor(&self) -> f64 {
        1.0 - self.composite_risk()
    }
}

// The serialized form carries the derived composite and adjustment factor so
// downstream reports need not recompute them. Deserialization ignores them.
impl Serialize for RiskProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RiskProfile", 6)?;
        state.serialize_field("technical_risk", &self.technical_risk)?;
        state.serialize_field("adoption_risk", &self.adoption_risk)?;
        state.serialize_field("regulatory_risk", &self.regulatory_risk)?;
        state.serialize_field("vendor_risk", &self.vendor_risk)?;
        state.serialize_field("composite_risk", &self.composite_risk())?;
        state.serialize_field("risk_adjustment_factor", &self.risk_adjustment_factor())?;
        state.end()
    }
}
