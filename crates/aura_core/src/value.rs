//! The five value dimensions
//!
//! Each function returns a base monthly dollar value, before maturity scaling
//! and risk adjustment. Missing inputs contribute zero rather than failing.

use crate::config::Project;
use crate::model::{LatencyConfig, OptionalityConfig, Task, ThroughputConfig, ValueBreakdown};

/// Direct Labour Arbitrage: labour cost the agent displaces across all tasks
#[must_use]
pub fn direct_labour_arbitrage(tasks: &[Task]) -> f64 {
    tasks.iter().map(Task::monthly_labour_value).sum()
}

/// Throughput Amplification: value of additional processing capacity
#[must_use]
pub fn throughput_amplification(config: Option<&ThroughputConfig>) -> f64 {
    config.map_or(0.0, ThroughputConfig::monthly_value)
}

/// Decision Quality Premium: value of errors the agent avoids.
///
/// Only tasks carrying both an error cost and a baseline error rate count,
/// and only when their decision volume can be determined.
#[must_use]
pub fn decision_quality_premium(tasks: &[Task]) -> f64 {
    tasks.iter().filter_map(Task::monthly_error_savings).sum()
}

/// Latency Value: value of faster processing
#[must_use]
pub fn latency_value(config: Option<&LatencyConfig>) -> f64 {
    config.map_or(0.0, LatencyConfig::monthly_value)
}

/// Optionality & Learning Value: probability-weighted strategic value
#[must_use]
pub fn optionality_value(config: Option<&OptionalityConfig>) -> f64 {
    config.map_or(0.0, OptionalityConfig::monthly_value)
}

/// Base monthly value of every dimension for a project
#[must_use]
pub fn value_breakdown(project: &Project) -> ValueBreakdown {
    ValueBreakdown {
        dla: direct_labour_arbitrage(&project.tasks),
        ta: throughput_amplification(project.throughput_config.as_ref()),
        dqp: decision_quality_premium(&project.tasks),
        lv: latency_value(project.latency_config.as_ref()),
        olv: optionality_value(project.optionality_config.as_ref()),
    }
}
