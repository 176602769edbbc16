//! Tests for the summary metrics of full calculations

use crate::calculator::Calculator;
use crate::config::{Project, ProjectBuilder};
use crate::metrics::{self, IrrConfig};
use crate::model::{CostStructure, Industry, RiskProfile, Task};

fn customer_service_agent() -> Project {
    ProjectBuilder::new("Customer Service Agent")
        .duration_months(24)
        .industry(Industry::Retail)
        .task(
            Task::new("Email Response", 40.0, 35.0)
                .with_accuracy(0.92)
                .with_oversight_rate(0.10),
        )
        .costs(CostStructure {
            initial_development: 50_000.0,
            platform_monthly: 2_000.0,
            ..Default::default()
        })
        .risk_profile(RiskProfile {
            technical_risk: 0.10,
            adoption_risk: 0.15,
            ..Default::default()
        })
        .build()
        .unwrap()
}

#[test]
fn test_complete_calculation() {
    let results = Calculator::new(customer_service_agent())
        .unwrap()
        .calculate();

    assert_eq!(results.project_name, "Customer Service Agent");
    assert_eq!(results.duration_months, 24);
    assert!(results.summary.total_gross_value > 0.0);
    assert!(results.summary.total_risk_adjusted_value < results.summary.total_gross_value);
    assert!(results.summary.total_cost > 0.0);
}

#[test]
fn test_roi_matches_definition() {
    let mut project = Project::new("Test");
    project.duration_months = 12;
    project.add_task(Task::new("Task", 40.0, 100.0).with_accuracy(0.95));
    project.costs.initial_development = 10_000.0;
    project.costs.platform_monthly = 500.0;
    let results = Calculator::new(project).unwrap().calculate();

    let s = &results.summary;
    let expected = (s.total_risk_adjusted_value - s.total_cost) / s.total_cost * 100.0;
    assert!((s.roi_percentage - expected).abs() < 1e-9);
}

#[test]
fn test_zero_cost_roi_is_zero() {
    let mut project = Project::new("Test");
    project.duration_months = 12;
    project.add_task(Task::new("Task", 40.0, 50.0));
    let results = Calculator::new(project).unwrap().calculate();

    assert_eq!(results.summary.total_cost, 0.0);
    assert_eq!(results.roi_percentage(), 0.0);
}

#[test]
fn test_payback_within_horizon() {
    let mut project = Project::new("Test");
    project.add_task(Task::new("Task", 40.0, 100.0));
    project.costs.initial_development = 20_000.0;
    project.costs.platform_monthly = 1_000.0;
    let results = Calculator::new(project).unwrap().calculate();

    let payback = results.payback_months().unwrap();
    assert!(payback > 0.0 && payback <= 24.0);

    // Interpolated payback falls between the straddling months
    let month = payback.ceil() as u32;
    assert!(results.month(month).unwrap().cumulative_net_value >= 0.0);
    if month > 1 {
        assert!(results.month(month - 1).unwrap().cumulative_net_value < 0.0);
    }
}

#[test]
fn test_payback_none_when_never_recovered() {
    let mut project = Project::new("Test");
    project.costs.initial_development = 10_000.0;
    let results = Calculator::new(project).unwrap().calculate();
    assert_eq!(results.payback_months(), None);
}

#[test]
fn test_npv_discounts_by_month() {
    let project = customer_service_agent();
    let rate = project.discount_rate / 12.0;
    let results = Calculator::new(project).unwrap().calculate();

    let expected: f64 = results
        .monthly_projections
        .iter()
        .map(|p| p.net_value / (1.0 + rate).powi(p.month as i32))
        .sum();
    assert!((results.net_present_value() - expected).abs() < 1e-6);

    let undiscounted: f64 = results.cash_flows().iter().sum();
    let at_zero = metrics::net_present_value(&results.monthly_projections, 0.0);
    assert!((at_zero - undiscounted).abs() < 1e-6);
}

#[test]
fn test_irr_none_without_sign_change() {
    // No costs: every month is non-negative
    let mut project = Project::new("Test");
    project.add_task(Task::new("Task", 40.0, 50.0));
    let results = Calculator::new(project).unwrap().calculate();
    assert!(results.cash_flows().iter().all(|cf| *cf >= 0.0));
    assert_eq!(results.irr(), None);

    // Costs only: every month is non-positive
    let mut project = Project::new("Test");
    project.costs.platform_monthly = 100.0;
    let results = Calculator::new(project).unwrap().calculate();
    assert_eq!(results.irr(), None);
}

#[test]
fn test_irr_zeroes_npv() {
    let results = Calculator::new(customer_service_agent())
        .unwrap()
        .calculate();
    let irr = results.irr().unwrap();

    let monthly = (1.0 + irr / 100.0).powf(1.0 / 12.0) - 1.0;
    let npv: f64 = results
        .cash_flows()
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / (1.0 + monthly).powi(t as i32 + 1))
        .sum();
    assert!(npv.abs() < 5.0, "npv at irr = {npv}");
}

#[test]
fn test_custom_irr_config() {
    let config = IrrConfig {
        max_iterations: 1,
        ..Default::default()
    };
    let results = Calculator::new(customer_service_agent())
        .unwrap()
        .with_irr_config(config)
        .calculate();
    assert_eq!(results.irr(), None);
}
