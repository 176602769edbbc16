//! Safety-adjusted ROI
//!
//! Operational safety signals (hallucinations, overrides, leaks, uptime, ...)
//! collapse into a composite score in `[0, 1]`. The score maps to a benefit
//! discount that haircuts gross value before ROI and NPV are recomputed.
//!
//! ```ignore
//! let signals = SafetySignals {
//!     hallucination_rate: 0.03,
//!     accuracy_rate: 0.94,
//!     human_override_rate: 0.08,
//!     ..Default::default()
//! };
//! let result = SafetyAdjustedRoi::default().calculate(500_000.0, 150_000.0, &signals);
//! println!("Risk-adjusted ROI: {:.1}%", result.risk_adjusted_roi);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::roi_percentage;
use crate::model::AuraResults;

const HALLUCINATION_WEIGHT: f64 = 0.20;
const ACCURACY_WEIGHT: f64 = 0.15;
const GUARDRAIL_WEIGHT: f64 = 0.10;
const OVERRIDE_WEIGHT: f64 = 0.15;
const DATA_LEAK_WEIGHT: f64 = 0.15;
const MODEL_DRIFT_WEIGHT: f64 = 0.10;
const AVAILABILITY_WEIGHT: f64 = 0.10;
const USER_TRUST_WEIGHT: f64 = 0.05;

/// Retraining runs tolerated before drift starts lowering the score
const FREE_RETRAINING_RUNS: u32 = 2;

/// Operational safety metrics for a deployed agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetySignals {
    // Accuracy & reliability
    pub hallucination_rate: f64,
    pub accuracy_rate: f64,
    pub consistency_rate: f64,

    // Safety interventions
    pub guardrail_intervention_rate: f64,
    pub content_filter_trigger_rate: f64,

    // Human oversight
    pub human_override_rate: f64,
    pub escalation_rate: f64,
    pub approval_rejection_rate: f64,

    // Security & privacy
    pub data_leak_incidents: u32,
    pub pii_detection_failures: u32,
    pub unauthorized_access_attempts: u32,

    // Model health
    pub model_drift_retraining_count: u32,
    pub latency_sla_breaches: u32,
    pub availability_percentage: f64,

    // User trust
    pub user_feedback_negative_rate: f64,
    pub user_correction_rate: f64,
}

impl Default for SafetySignals {
    fn default() -> Self {
        Self {
            hallucination_rate: 0.0,
            accuracy_rate: 0.95,
            consistency_rate: 0.90,
            guardrail_intervention_rate: 0.0,
            content_filter_trigger_rate: 0.0,
            human_override_rate: 0.0,
            escalation_rate: 0.0,
            approval_rejection_rate: 0.0,
            data_leak_incidents: 0,
            pii_detection_failures: 0,
            unauthorized_access_attempts: 0,
            model_drift_retraining_count: 0,
            latency_sla_breaches: 0,
            availability_percentage: 99.9,
            user_feedback_negative_rate: 0.0,
            user_correction_rate: 0.0,
        }
    }
}

impl SafetySignals {
    /// Weighted safety score, clamped to `[0, 1]`; higher is safer
    #[must_use]
    pub fn composite_safety_score(&self) -> f64 {
        let hallucination = 1.0 - (self.hallucination_rate * 5.0).min(1.0);
        let guardrails = 1.0 - (self.guardrail_intervention_rate * 2.0).min(1.0);
        let human_override = 1.0 - (self.human_override_rate * 2.0).min(1.0);
        let data_leaks = if self.data_leak_incidents == 0 {
            1.0
        } else {
            (1.0 - f64::from(self.data_leak_incidents) * 0.2).max(0.0)
        };
        let model_drift = if self.model_drift_retraining_count <= FREE_RETRAINING_RUNS {
            1.0
        } else {
            let excess = self.model_drift_retraining_count - FREE_RETRAINING_RUNS;
            (1.0 - f64::from(excess) * 0.1).max(0.0)
        };
        let availability = self.availability_percentage / 100.0;
        let user_trust = 1.0 - self.user_feedback_negative_rate;

        let composite = HALLUCINATION_WEIGHT * hallucination
            + ACCURACY_WEIGHT * self.accuracy_rate
            + GUARDRAIL_WEIGHT * guardrails
            + OVERRIDE_WEIGHT * human_override
            + DATA_LEAK_WEIGHT * data_leaks
            + MODEL_DRIFT_WEIGHT * model_drift
            + AVAILABILITY_WEIGHT * availability
            + USER_TRUST_WEIGHT * user_trust;

        composite.clamp(0.0, 1.0)
    }
}

/// Acceptable limits for safety signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyThresholds {
    pub max_hallucination_rate: f64,
    pub min_accuracy_rate: f64,
    pub max_guardrail_intervention_rate: f64,
    pub max_human_override_rate: f64,
    pub max_data_leak_incidents: u32,
    pub max_model_retraining_per_year: u32,
    pub min_availability: f64,
    pub max_negative_feedback_rate: f64,
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        Self {
            max_hallucination_rate: 0.05,
            min_accuracy_rate: 0.90,
            max_guardrail_intervention_rate: 0.10,
            max_human_override_rate: 0.15,
            max_data_leak_incidents: 0,
            max_model_retraining_per_year: 4,
            min_availability: 99.5,
            max_negative_feedback_rate: 0.10,
        }
    }
}

/// Overall safety risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Prioritised follow-up actions for this level
    #[must_use]
    pub fn next_steps(self) -> [&'static str; 4] {
        match self {
            RiskLevel::Critical => [
                "1. Immediately pause production deployment",
                "2. Conduct emergency security and safety review",
                "3. Implement mandatory human oversight for all decisions",
                "4. Schedule executive briefing on risk mitigation",
            ],
            RiskLevel::High => [
                "1. Increase human oversight threshold",
                "2. Implement additional guardrails",
                "3. Schedule weekly safety review meetings",
                "4. Develop remediation plan within 30 days",
            ],
            RiskLevel::Medium => [
                "1. Continue monitoring key metrics",
                "2. Address identified violations within 60 days",
                "3. Schedule monthly safety reviews",
                "4. Document and track improvement progress",
            ],
            RiskLevel::Low => [
                "1. Maintain current monitoring practices",
                "2. Review metrics quarterly",
                "3. Continue optimization efforts",
                "4. Document best practices for other projects",
            ],
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

/// Outcome of a safety-adjusted ROI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyAdjustedResult {
    pub gross_benefit: f64,
    pub total_cost: f64,
    pub safety_signals: SafetySignals,
    pub safety_score: f64,
    /// Share of gross benefit retained after the safety haircut
    pub safety_discount: f64,
    pub risk_adjusted_benefit: f64,
    pub risk_adjusted_roi: f64,
    pub unadjusted_roi: f64,
    /// `risk_adjusted_roi - unadjusted_roi`, never positive for a discount <= 1
    pub roi_impact: f64,
    pub threshold_violations: Vec<String>,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

impl SafetyAdjustedResult {
    #[must_use]
    pub fn next_steps(&self) -> [&'static str; 4] {
        self.risk_level.next_steps()
    }

    /// Gross benefit lost to the safety haircut
    #[must_use]
    pub fn benefit_reduction(&self) -> f64 {
        self.gross_benefit - self.risk_adjusted_benefit
    }
}

/// NPV of a monthly series with and without the safety haircut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyAdjustedNpv {
    pub unadjusted_npv: f64,
    pub risk_adjusted_npv: f64,
    pub safety_score: f64,
    pub safety_discount: f64,
    pub npv_impact: f64,
    /// Impact relative to `|unadjusted_npv|`; zero when that is zero
    pub npv_impact_percentage: f64,
}

/// Safety-adjusted ROI calculator
#[derive(Debug, Clone, Default)]
pub struct SafetyAdjustedRoi {
    thresholds: SafetyThresholds,
}

impl SafetyAdjustedRoi {
    #[must_use]
    pub fn new(thresholds: SafetyThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> &SafetyThresholds {
        &self.thresholds
    }

    /// Apply the safety haircut to an aggregate benefit and cost
    #[must_use]
    pub fn calculate(
        &self,
        gross_benefit: f64,
        total_cost: f64,
        signals: &SafetySignals,
    ) -> SafetyAdjustedResult {
        let safety_score = signals.composite_safety_score();
        let safety_discount = safety_discount(safety_score);
        let threshold_violations = self.threshold_violations(signals);
        let risk_level = self.risk_level(signals, safety_score, threshold_violations.len());
        let recommendations = recommendations(signals);

        let risk_adjusted_benefit = gross_benefit * safety_discount;
        let unadjusted_roi = roi_percentage(gross_benefit, total_cost);
        let risk_adjusted_roi = roi_percentage(risk_adjusted_benefit, total_cost);

        tracing::debug!(
            safety_score,
            safety_discount,
            %risk_level,
            violations = threshold_violations.len(),
            "Safety adjustment computed"
        );

        SafetyAdjustedResult {
            gross_benefit,
            total_cost,
            safety_signals: signals.clone(),
            safety_score,
            safety_discount,
            risk_adjusted_benefit,
            risk_adjusted_roi,
            unadjusted_roi,
            roi_impact: risk_adjusted_roi - unadjusted_roi,
            threshold_violations,
            risk_level,
            recommendations,
        }
    }

    /// Apply the safety haircut to a finished calculation's gross value and cost
    #[must_use]
    pub fn calculate_for(
        &self,
        results: &AuraResults,
        signals: &SafetySignals,
    ) -> SafetyAdjustedResult {
        self.calculate(
            results.summary.total_gross_value,
            results.summary.total_cost,
            signals,
        )
    }

    /// Discount monthly benefits and costs at `annual_rate`, with and without the
    /// haircut on benefits. Series of unequal length are truncated to the shorter.
    #[must_use]
    pub fn risk_adjusted_npv(
        &self,
        monthly_benefits: &[f64],
        monthly_costs: &[f64],
        signals: &SafetySignals,
        annual_rate: f64,
    ) -> SafetyAdjustedNpv {
        let safety_score = signals.composite_safety_score();
        let safety_discount = safety_discount(safety_score);
        let monthly_rate = annual_rate / 12.0;

        let mut unadjusted_npv = 0.0;
        let mut risk_adjusted_npv = 0.0;
        for (month, (benefit, cost)) in monthly_benefits.iter().zip(monthly_costs).enumerate() {
            let discount_factor = 1.0 / (1.0 + monthly_rate).powi(month as i32 + 1);
            unadjusted_npv += (benefit - cost) * discount_factor;
            risk_adjusted_npv += (benefit * safety_discount - cost) * discount_factor;
        }

        let npv_impact = risk_adjusted_npv - unadjusted_npv;
        let npv_impact_percentage = if unadjusted_npv == 0.0 {
            0.0
        } else {
            npv_impact / unadjusted_npv.abs() * 100.0
        };

        SafetyAdjustedNpv {
            unadjusted_npv,
            risk_adjusted_npv,
            safety_score,
            safety_discount,
            npv_impact,
            npv_impact_percentage,
        }
    }

    /// One human-readable line per breached threshold
    #[must_use]
    pub fn threshold_violations(&self, signals: &SafetySignals) -> Vec<String> {
        let t = &self.thresholds;
        let mut violations = Vec::new();

        if signals.hallucination_rate > t.max_hallucination_rate {
            violations.push(format!(
                "Hallucination rate ({}) exceeds threshold ({})",
                percent(signals.hallucination_rate),
                percent(t.max_hallucination_rate)
            ));
        }
        if signals.accuracy_rate < t.min_accuracy_rate {
            violations.push(format!(
                "Accuracy rate ({}) below threshold ({})",
                percent(signals.accuracy_rate),
                percent(t.min_accuracy_rate)
            ));
        }
        if signals.guardrail_intervention_rate > t.max_guardrail_intervention_rate {
            violations.push(format!(
                "Guardrail intervention rate ({}) exceeds threshold",
                percent(signals.guardrail_intervention_rate)
            ));
        }
        if signals.human_override_rate > t.max_human_override_rate {
            violations.push(format!(
                "Human override rate ({}) exceeds threshold",
                percent(signals.human_override_rate)
            ));
        }
        if signals.data_leak_incidents > t.max_data_leak_incidents {
            violations.push(format!(
                "Data leak incidents ({}) detected",
                signals.data_leak_incidents
            ));
        }
        if signals.availability_percentage < t.min_availability {
            // Already a percentage
            violations.push(format!(
                "Availability ({:.1}%) below threshold",
                signals.availability_percentage
            ));
        }
        if signals.user_feedback_negative_rate > t.max_negative_feedback_rate {
            violations.push(format!(
                "Negative feedback rate ({}) exceeds threshold",
                percent(signals.user_feedback_negative_rate)
            ));
        }

        violations
    }

    fn risk_level(&self, signals: &SafetySignals, score: f64, violation_count: usize) -> RiskLevel {
        let data_leak = signals.data_leak_incidents > self.thresholds.max_data_leak_incidents;
        if data_leak || score < 0.5 {
            RiskLevel::Critical
        } else if score < 0.7 || violation_count >= 3 {
            RiskLevel::High
        } else if score < 0.85 || violation_count >= 1 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Map a safety score to the share of benefit retained.
///
/// Piecewise linear: gentle above 0.9, steeper through 0.5, then
/// proportional with a floor of 0.1.
#[must_use]
pub fn safety_discount(score: f64) -> f64 {
    if score >= 0.9 {
        1.0 - (1.0 - score) * 0.5
    } else if score >= 0.7 {
        0.95 - (0.9 - score) * 1.5
    } else if score >= 0.5 {
        0.65 - (0.7 - score) * 1.25
    } else {
        (score * 1.2).max(0.1)
    }
}

fn recommendations(signals: &SafetySignals) -> Vec<String> {
    let rules: [(bool, &str); 7] = [
        (
            signals.hallucination_rate > 0.03,
            "Implement fact-checking layer or RAG system to reduce hallucinations",
        ),
        (
            signals.accuracy_rate < 0.92,
            "Review training data quality and consider model fine-tuning",
        ),
        (
            signals.human_override_rate > 0.10,
            "Analyze override patterns to identify systematic issues",
        ),
        (
            signals.data_leak_incidents > 0,
            "URGENT: Conduct security audit and implement additional data protection measures",
        ),
        (
            signals.availability_percentage < 99.5,
            "Review infrastructure reliability and implement redundancy",
        ),
        (
            signals.user_feedback_negative_rate > 0.05,
            "Conduct user research to understand pain points and improve experience",
        ),
        (
            signals.model_drift_retraining_count > FREE_RETRAINING_RUNS,
            "Implement continuous monitoring and automated drift detection",
        ),
    ];

    let mut recommendations: Vec<String> = rules
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, text)| text.to_string())
        .collect();

    if recommendations.is_empty() {
        recommendations
            .push("Safety metrics are within acceptable ranges. Continue monitoring.".to_string());
    }
    recommendations
}

fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
