//! Loading projects, scenarios and safety signals from disk
//!
//! Files ending in `.yaml` or `.yml` are read as YAML; everything else is
//! read as JSON, the reference format.

use std::fs;
use std::path::Path;

use aura_core::{AuraResults, Project, SafetySignals, Scenario};
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub enum InputError {
    /// I/O error (file not found, permission denied, etc.)
    Io(String),
    /// Parse error (invalid JSON or YAML, missing required fields)
    Parse(String),
    /// Serialization error
    Serialize(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(msg) => write!(f, "IO error: {}", msg),
            InputError::Parse(msg) => write!(f, "Parse error: {}", msg),
            InputError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for InputError {}

/// On-disk format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

/// Parse `content` in the given format
pub fn parse<T: DeserializeOwned>(content: &str, format: InputFormat) -> Result<T, InputError> {
    match format {
        InputFormat::Json => {
            serde_json::from_str(content).map_err(|e| InputError::Parse(e.to_string()))
        }
        InputFormat::Yaml => {
            serde_saphyr::from_str(content).map_err(|e| InputError::Parse(e.to_string()))
        }
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let content = fs::read_to_string(path)
        .map_err(|e| InputError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    parse(&content, InputFormat::from_path(path)).map_err(|e| match e {
        InputError::Parse(msg) => InputError::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Load a project definition. Domain validation is left to the calculator.
pub fn load_project(path: &Path) -> Result<Project, InputError> {
    let project: Project = load(path)?;
    tracing::debug!(
        path = %path.display(),
        project = %project.name,
        tasks = project.tasks.len(),
        "Loaded project"
    );
    Ok(project)
}

/// Load a list of what-if scenarios
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, InputError> {
    load(path)
}

/// Load operational safety signals; missing fields take their defaults
pub fn load_safety_signals(path: &Path) -> Result<SafetySignals, InputError> {
    load(path)
}

/// Render results as pretty-printed JSON
pub fn results_to_json(results: &AuraResults) -> Result<String, InputError> {
    serde_json::to_string_pretty(results).map_err(|e| InputError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::SensitivityParameter;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("project")), InputFormat::Json);
    }

    #[test]
    fn test_load_json_project() {
        let dir = tempdir().unwrap();
        let path = write(
            &dir,
            "project.json",
            r#"{
                "name": "Invoice Agent",
                "tasks": [{"name": "Matching", "hours_per_week": 20, "hourly_rate": 45}],
                "costs": {"initial_development": 30000}
            }"#,
        );

        let project = load_project(&path).unwrap();
        assert_eq!(project.name, "Invoice Agent");
        assert_eq!(project.duration_months, 24);
        assert_eq!(project.tasks[0].accuracy, 0.90);
        assert_eq!(project.costs.initial_development, 30_000.0);
    }

    #[test]
    fn test_load_yaml_project() {
        let dir = tempdir().unwrap();
        let path = write(
            &dir,
            "project.yaml",
            "name: Invoice Agent\n\
             duration_months: 12\n\
             industry: manufacturing\n\
             tasks:\n\
             \x20 - name: Matching\n\
             \x20   hours_per_week: 20.0\n\
             \x20   hourly_rate: 45.0\n\
             latency_config:\n\
             \x20 transactions_per_month: 500.0\n\
             \x20 old_time_hours: 4.0\n\
             \x20 new_time_hours: 1.0\n\
             \x20 value_per_hour_saved: 12.0\n",
        );

        let project = load_project(&path).unwrap();
        assert_eq!(project.duration_months, 12);
        assert_eq!(project.industry, aura_core::model::Industry::Manufacturing);
        assert_eq!(project.tasks.len(), 1);
        let latency = project.latency_config.unwrap();
        assert_eq!(latency.time_sensitivity_factor, 1.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_project(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "bad.json", "{\"name\": ");
        assert!(matches!(load_project(&path), Err(InputError::Parse(_))));

        let path = write(&dir, "nameless.json", "{\"duration_months\": 3}");
        assert!(matches!(load_project(&path), Err(InputError::Parse(_))));
    }

    #[test]
    fn test_load_scenarios() {
        let dir = tempdir().unwrap();
        let path = write(
            &dir,
            "scenarios.json",
            r#"[
                {"name": "Optimistic", "modifications": {"accuracy": 1.1, "cost": 0.9}},
                {"modifications": {"hourly_rate": 1.2}}
            ]"#,
        );

        let scenarios = load_scenarios(&path).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "Optimistic");
        assert_eq!(scenarios[1].name, "Unnamed");
        assert_eq!(
            scenarios[1].modifications.get(&SensitivityParameter::HourlyRate),
            Some(&1.2)
        );
    }

    #[test]
    fn test_unknown_scenario_parameter_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write(
            &dir,
            "scenarios.json",
            r#"[{"name": "Bad", "modifications": {"latency": 2.0}}]"#,
        );
        assert!(matches!(load_scenarios(&path), Err(InputError::Parse(_))));
    }

    #[test]
    fn test_demo_files_load_and_calculate() {
        let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");

        let project = load_project(&demos.join("customer_service.json")).unwrap();
        let calculator = aura_core::Calculator::new(project).unwrap();
        assert_eq!(calculator.calculate().duration_months, 24);

        let scenarios = load_scenarios(&demos.join("scenarios.yaml")).unwrap();
        let outcomes = calculator.what_if_analysis(&scenarios).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[1].0, "Budget overrun");

        let signals = load_safety_signals(&demos.join("safety_signals.json")).unwrap();
        assert_eq!(signals.escalation_rate, 0.06);
    }

    #[test]
    fn test_load_safety_signals_with_defaults() {
        let dir = tempdir().unwrap();
        let path = write(
            &dir,
            "signals.yaml",
            "hallucination_rate: 0.02\nhuman_override_rate: 0.08\n",
        );

        let signals = load_safety_signals(&path).unwrap();
        assert_eq!(signals.hallucination_rate, 0.02);
        assert_eq!(signals.human_override_rate, 0.08);
        assert_eq!(signals.accuracy_rate, 0.95);
        assert_eq!(signals.availability_percentage, 99.9);
    }
}
