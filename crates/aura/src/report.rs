//! Console summaries of calculation results

use std::fmt::Write;

use aura_core::{AuraResults, SafetyAdjustedResult, SensitivityParameter};

use crate::format::{format_currency_short, format_months, format_percent, format_rate};

const WIDTH: usize = 60;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title:^WIDTH$}");
    let _ = writeln!(out, "{}", "-".repeat(WIDTH));
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<24}{value:>18}");
}

/// Summary block for a single calculation; `verbose` adds the value breakdown
/// and risk profile
#[must_use]
pub fn results_summary(results: &AuraResults, verbose: bool) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  ROI ANALYSIS: {}", results.project_name);
    let _ = writeln!(out, "{rule}");

    let s = &results.summary;
    heading(&mut out, "SUMMARY");
    row(&mut out, "Duration:", &format!("{} months", results.duration_months));
    row(&mut out, "Total Gross Value:", &format_currency_short(s.total_gross_value));
    row(
        &mut out,
        "Risk-Adjusted Value:",
        &format_currency_short(s.total_risk_adjusted_value),
    );
    row(&mut out, "Total Cost:", &format_currency_short(s.total_cost));
    row(&mut out, "Net Present Value:", &format_currency_short(s.net_present_value));
    row(&mut out, "ROI:", &format_percent(s.roi_percentage));
    row(&mut out, "Payback Period:", &format_months(s.payback_months));
    row(
        &mut out,
        "IRR:",
        &s.irr.map_or_else(|| "n/a".to_string(), format_percent),
    );

    if verbose {
        heading(&mut out, "VALUE BREAKDOWN (Monthly)");
        for (label, value) in results.value_breakdown.dimensions() {
            row(&mut out, &format!("{label}:"), &format_currency_short(value));
        }
        row(
            &mut out,
            "Total Monthly Value:",
            &format_currency_short(results.value_breakdown.total()),
        );

        heading(&mut out, "RISK PROFILE");
        let risk = &results.risk_profile;
        row(&mut out, "Technical Risk:", &format_rate(risk.technical_risk));
        row(&mut out, "Adoption Risk:", &format_rate(risk.adoption_risk));
        row(&mut out, "Regulatory Risk:", &format_rate(risk.regulatory_risk));
        row(&mut out, "Vendor Risk:", &format_rate(risk.vendor_risk));
        row(&mut out, "Composite Risk:", &format_rate(risk.composite_risk()));
        row(
            &mut out,
            "Risk Adjustment:",
            &format_rate(risk.risk_adjustment_factor()),
        );
    }

    let _ = writeln!(out, "\n{rule}");
    out
}

/// Safety-adjusted section appended to a calculation summary
#[must_use]
pub fn safety_summary(result: &SafetyAdjustedResult) -> String {
    let mut out = String::new();
    heading(&mut out, "SAFETY-ADJUSTED ROI");
    row(&mut out, "Safety Score:", &format!("{:.3}", result.safety_score));
    row(&mut out, "Safety Discount:", &format_rate(result.safety_discount));
    row(&mut out, "Risk Level:", &result.risk_level.to_string());
    row(&mut out, "Unadjusted ROI:", &format_percent(result.unadjusted_roi));
    row(&mut out, "Risk-Adjusted ROI:", &format_percent(result.risk_adjusted_roi));
    row(&mut out, "ROI Impact:", &format_percent(result.roi_impact));

    if !result.threshold_violations.is_empty() {
        let _ = writeln!(out, "\n  Violations:");
        for violation in &result.threshold_violations {
            let _ = writeln!(out, "    - {violation}");
        }
    }
    let _ = writeln!(out, "\n  Recommendations:");
    for recommendation in &result.recommendations {
        let _ = writeln!(out, "    - {recommendation}");
    }
    let _ = writeln!(out, "\n  Next Steps:");
    for step in result.next_steps() {
        let _ = writeln!(out, "    {step}");
    }
    out
}

/// One line per sweep point
#[must_use]
pub fn sensitivity_table(parameter: SensitivityParameter, points: &[(f64, AuraResults)]) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("SENSITIVITY: {}", parameter.label()));
    let _ = writeln!(
        out,
        "  {:>10}  {:>14}  {:>10}  {:>14}",
        "Multiplier", "NPV", "ROI", "Payback"
    );
    for (multiplier, results) in points {
        let _ = writeln!(
            out,
            "  {:>10}  {:>14}  {:>10}  {:>14}",
            format!("{multiplier:.2}x"),
            format_currency_short(results.net_present_value()),
            format_percent(results.roi_percentage()),
            format_months(results.payback_months()),
        );
    }
    out
}

/// One line per what-if scenario
#[must_use]
pub fn what_if_table(outcomes: &[(String, AuraResults)]) -> String {
    let mut out = String::new();
    heading(&mut out, "WHAT-IF SCENARIOS");
    let _ = writeln!(
        out,
        "  {:<18}  {:>14}  {:>10}  {:>12}",
        "Scenario", "NPV", "ROI", "Payback"
    );
    for (name, results) in outcomes {
        let _ = writeln!(
            out,
            "  {:<18}  {:>14}  {:>10}  {:>12}",
            name,
            format_currency_short(results.net_present_value()),
            format_percent(results.roi_percentage()),
            format_months(results.payback_months()),
        );
    }
    out
}
