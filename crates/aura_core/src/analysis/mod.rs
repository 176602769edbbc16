//! Deterministic parameter sweeps.
//!
//! Both sweeps re-run the full calculation on a rescaled copy of the project:
//!
//! ```ignore
//! use aura_core::analysis::{Scenario, SensitivityParameter};
//!
//! let calculator = Calculator::new(project)?;
//!
//! // One parameter, several multipliers
//! let points = calculator.sensitivity_analysis(
//!     SensitivityParameter::Accuracy,
//!     &[0.8, 0.9, 1.0, 1.1, 1.2],
//! )?;
//!
//! // Several parameters at once, per named scenario
//! let scenarios = vec![
//!     Scenario::new("Optimistic").with(SensitivityParameter::Accuracy, 1.1),
//!     Scenario::new("Budget overrun").with(SensitivityParameter::Cost, 1.3),
//! ];
//! let outcomes = calculator.what_if_analysis(&scenarios)?;
//! ```

mod config;
mod evaluator;

pub use config::{Scenario, SensitivityParameter};
pub use evaluator::{sensitivity_sweep, what_if};
