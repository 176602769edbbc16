//! Criterion benchmarks for aura_core projections
//!
//! Run with: cargo bench -p aura_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use aura_core::analysis::{Scenario, SensitivityParameter};
use aura_core::calculator::Calculator;
use aura_core::config::{Project, ProjectBuilder};
use aura_core::model::{
    CostStructure, LatencyConfig, OptionalityConfig, Task, ThroughputConfig,
};

fn create_project(duration_months: u32) -> Project {
    let mut builder = ProjectBuilder::new("Benchmark Agent")
        .duration_months(duration_months)
        .costs(CostStructure {
            initial_development: 120_000.0,
            platform_monthly: 3_500.0,
            api_cost_per_call: 0.02,
            estimated_calls_per_month: 80_000.0,
            maintenance_monthly: 1_200.0,
            training_initial: 8_000.0,
            ..Default::default()
        })
        .throughput(ThroughputConfig::new(500.0, 900.0, 4.0))
        .latency(LatencyConfig::new(3_000.0, 4.0, 0.5, 15.0))
        .optionality(OptionalityConfig {
            process_insights_value: 40_000.0,
            ..Default::default()
        });

    for i in 0..10 {
        builder = builder.task(
            Task::new(format!("Task {i}"), 10.0 + f64::from(i), 45.0)
                .with_volume_per_week(100 + i * 10)
                .with_error_profile(80.0, 0.12),
        );
    }

    builder.build().expect("benchmark project is valid")
}

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");

    for months in [12u32, 60, 240].iter() {
        let calculator = Calculator::new(create_project(*months)).expect("valid project");
        group.bench_with_input(BenchmarkId::new("months", months), months, |b, _| {
            b.iter(|| black_box(&calculator).calculate())
        });
    }

    group.finish();
}

fn bench_sensitivity(c: &mut Criterion) {
    let calculator = Calculator::new(create_project(36)).expect("valid project");
    let multipliers: Vec<f64> = (0..41).map(|i| 0.5 + f64::from(i) * 0.025).collect();

    c.bench_function("sensitivity_41_points", |b| {
        b.iter(|| {
            calculator.sensitivity_analysis(
                black_box(SensitivityParameter::Accuracy),
                black_box(&multipliers),
            )
        })
    });
}

fn bench_what_if(c: &mut Criterion) {
    let calculator = Calculator::new(create_project(36)).expect("valid project");
    let scenarios: Vec<Scenario> = (0..16)
        .map(|i| {
            let step = f64::from(i) * 0.05;
            Scenario::new(format!("Scenario {i}"))
                .with(SensitivityParameter::Cost, 0.6 + step)
                .with(SensitivityParameter::HourlyRate, 1.4 - step)
        })
        .collect();

    c.bench_function("what_if_16_scenarios", |b| {
        b.iter(|| calculator.what_if_analysis(black_box(&scenarios)))
    });
}

criterion_group!(benches, bench_calculate, bench_sensitivity, bench_what_if);
criterion_main!(benches);
