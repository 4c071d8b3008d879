pub mod product;
pub mod user;

use serde::{Deserialize, Serialize};

/// One field-level validation failure. A failed validation carries the full
/// list of these in `ApiError::Validation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Required, non-empty string bounded to `max_chars`. Returns None after
/// recording a violation so callers can keep collecting.
fn require_string(
    field: &str,
    value: Option<String>,
    max_chars: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        None => {
            violations.push(FieldViolation::new(field, "is required"));
            None
        }
        Some(s) if s.is_empty() => {
            violations.push(FieldViolation::new(field, "is not allowed to be empty"));
            None
        }
        Some(s) if s.chars().count() > max_chars => {
            violations.push(FieldViolation::new(
                field,
                format!("must be at most {} characters", max_chars),
            ));
            None
        }
        Some(s) => Some(s),
    }
}

fn optional_string(
    field: &str,
    value: Option<String>,
    max_chars: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(s) if s.chars().count() > max_chars => {
            violations.push(FieldViolation::new(
                field,
                format!("must be at most {} characters", max_chars),
            ));
            None
        }
        other => other,
    }
}

fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
