//! AURA ROI projection engine
//!
//! This crate turns a description of an AI-agent deployment into
//! month-by-month financial projections and summary metrics. It supports:
//! - Five value dimensions (labour arbitrage, throughput, decision quality, latency, optionality)
//! - A four-stage maturity curve with compounding learning in the optimized stage
//! - A weighted risk haircut applied to every month
//! - NPV, IRR, payback period and ROI over the projection horizon
//! - Sensitivity and what-if sweeps over the same engine
//! - Safety-adjusted ROI from operational safety signals
//!
//! # Example
//!
//! ```ignore
//! use aura_core::{Calculator, ProjectBuilder};
//! use aura_core::model::{CostStructure, Task};
//!
//! let project = ProjectBuilder::new("Customer Service Agent")
//!     .task(Task::new("Email Response", 40.0, 35.0).with_accuracy(0.92))
//!     .costs(CostStructure {
//!         initial_development: 50_000.0,
//!         platform_monthly: 2_000.0,
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let results = Calculator::new(project)?.calculate();
//! println!("NPV: {:.0}", results.net_present_value());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod calculator;
pub mod error;
pub mod metrics;
pub mod projection;
pub mod safety;
pub mod value;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{Scenario, SensitivityParameter};
pub use calculator::Calculator;
pub use config::{Project, ProjectBuilder};
pub use error::{ParseParameterError, ValidationError};
pub use metrics::IrrConfig;
pub use model::AuraResults;
pub use safety::{
    RiskLevel, SafetyAdjustedNpv, SafetyAdjustedResult, SafetyAdjustedRoi, SafetySignals,
    SafetyThresholds,
};
