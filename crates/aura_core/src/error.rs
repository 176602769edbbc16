use std::fmt;

/// Errors raised when a project or one of its child configurations is out of domain
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyProjectName,
    /// `duration_months` is zero. The field is unsigned, so negative
    /// durations are already rejected when a project file is parsed.
    ZeroDuration,
    /// A field that must not be negative
    Negative {
        entity: String,
        field: &'static str,
        value: f64,
    },
    /// A rate or probability that must lie in `[0, 1]`
    OutOfUnitRange {
        entity: String,
        field: &'static str,
        value: f64,
    },
    /// Latency configuration where the new processing time is slower than the old one
    LatencyRegression {
        old_time_hours: f64,
        new_time_hours: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyProjectName => write!(f, "project must have a name"),
            ValidationError::ZeroDuration => write!(f, "project duration must be positive"),
            ValidationError::Negative {
                entity,
                field,
                value,
            } => write!(f, "{entity}: {field} must be non-negative (got {value})"),
            ValidationError::OutOfUnitRange {
                entity,
                field,
                value,
            } => write!(f, "{entity}: {field} must be between 0 and 1 (got {value})"),
            ValidationError::LatencyRegression {
                old_time_hours,
                new_time_hours,
            } => write!(
                f,
                "latency config: new_time_hours ({new_time_hours}) should not exceed old_time_hours ({old_time_hours})"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Returned when a sensitivity parameter name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseParameterError(pub String);

impl fmt::Display for ParseParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown parameter '{}' (expected one of: accuracy, hourly_rate, hours_per_week, cost, discount_rate)",
            self.0
        )
    }
}

impl std::error::Error for ParseParameterError {}

// Range helpers shared by the model validators

pub(crate) fn ensure_non_negative(entity: &str, field: &'static str, value: f64) -> Result<()> {
    if value < 0.0 || value.is_nan() {
        return Err(ValidationError::Negative {
            entity: entity.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

pub(crate) fn ensure_unit_range(entity: &str, field: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfUnitRange {
            entity: entity.to_string(),
            field,
            value,
        });
    }
    Ok(())
}
