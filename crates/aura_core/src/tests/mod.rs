//! Integration tests for the AURA projection engine
//!
//! Tests are organized by topic:
//! - `value_dimensions` - The five value formulas through the calculator
//! - `projections` - Maturity curve, risk haircut and monthly series
//! - `financial_metrics` - NPV, payback, IRR and ROI on full calculations
//! - `sensitivity` - Sensitivity and what-if sweeps
//! - `serialization` - JSON input/output shape and round trips
//! - `validation` - Domain checks on projects and child configs

mod financial_metrics;
mod validation;
