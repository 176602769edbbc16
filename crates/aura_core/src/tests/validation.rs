//! Tests for project validation through the calculator

use crate::calculator::Calculator;
use crate::config::Project;
use crate::error::ValidationError;
use crate::model::{LatencyConfig, RiskProfile, Task, ThroughputConfig};

fn valid() -> Project {
    let mut project = Project::new("Test");
    project.add_task(Task::new("Task", 40.0, 50.0));
    project
}

fn rejected_field(project: Project) -> &'static str {
    match Calculator::new(project) {
        Err(ValidationError::Negative { field, .. })
        | Err(ValidationError::OutOfUnitRange { field, .. }) => field,
        other => panic!("expected a field error, got {other:?}"),
    }
}

#[test]
fn test_empty_name() {
    let mut project = valid();
    project.name.clear();
    assert_eq!(
        Calculator::new(project).unwrap_err(),
        ValidationError::EmptyProjectName
    );
}

#[test]
fn test_zero_duration() {
    let mut project = valid();
    project.duration_months = 0;
    assert_eq!(Calculator::new(project).unwrap_err(), ValidationError::ZeroDuration);
}

#[test]
fn test_task_fields() {
    let cases: [(fn(&mut Task), &str); 5] = [
        (|t| t.hours_per_week = -1.0, "hours_per_week"),
        (|t| t.hourly_rate = -0.01, "hourly_rate"),
        (|t| t.accuracy = 1.01, "accuracy"),
        (|t| t.accuracy = -0.1, "accuracy"),
        (|t| t.oversight_rate = 2.0, "oversight_rate"),
    ];
    for (mutate, field) in cases {
        let mut project = valid();
        mutate(&mut project.tasks[0]);
        assert_eq!(rejected_field(project), field);
    }
}

#[test]
fn test_risk_fields() {
    let mut project = valid();
    project.risk_profile = RiskProfile {
        vendor_risk: 1.5,
        ..Default::default()
    };
    assert_eq!(rejected_field(project), "vendor_risk");

    assert!(RiskProfile::new(0.1, 0.1, -0.1, 0.1).is_err());
}

#[test]
fn test_throughput_fields() {
    let mut project = valid();
    project.throughput_config = Some(ThroughputConfig::new(-5.0, 10.0, 1.0));
    assert_eq!(rejected_field(project), "old_capacity");

    let mut project = valid();
    project.throughput_config = Some(ThroughputConfig::new(5.0, 10.0, 1.0).with_utilization_rate(1.2));
    assert_eq!(rejected_field(project), "utilization_rate");
}

#[test]
fn test_latency_regression() {
    let mut project = valid();
    project.latency_config = Some(LatencyConfig::new(100.0, 0.5, 2.0, 25.0));
    let err = Calculator::new(project).unwrap_err();
    assert_eq!(
        err,
        ValidationError::LatencyRegression {
            old_time_hours: 0.5,
            new_time_hours: 2.0,
        }
    );
    assert!(err.to_string().contains("should not exceed"));
}

#[test]
fn test_error_message_names_entity() {
    let mut project = valid();
    project.tasks[0].accuracy = 1.5;
    let message = Calculator::new(project).unwrap_err().to_string();
    assert!(message.contains("task 'Task'"), "{message}");
    assert!(message.contains("accuracy"), "{message}");
}

#[test]
fn test_first_failing_task_is_reported() {
    let mut project = valid();
    project.add_task(Task::new("Second", -1.0, 50.0));
    project.add_task(Task::new("Third", 1.0, 50.0).with_accuracy(3.0));
    match Calculator::new(project) {
        Err(ValidationError::Negative { entity, .. }) => assert_eq!(entity, "task 'Second'"),
        other => panic!("unexpected {other:?}"),
    }
}

mod negative_cost_logging {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::valid;
    use crate::analysis::SensitivityParameter;
    use crate::calculator::Calculator;

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_negative_cost_warned_once_per_calculator() {
        let mut project = valid();
        project.costs.platform_monthly = -100.0;

        assert_eq!(count_warnings(|| assert!(project.check_domain().is_ok())), 0);

        let warnings = count_warnings(|| {
            let calc = Calculator::new(project.clone()).unwrap();
            calc.sensitivity_analysis(SensitivityParameter::HourlyRate, &[0.8, 1.0, 1.2])
                .unwrap();
        });
        assert_eq!(warnings, 1);
    }
}
