//! Field-rule evaluator — pure logic, no database access.
//!
//! Each rule inspects a single field value and returns `Some(FieldViolation)`
//! on failure. Entity-level constraint sets are declared next to the entity
//! types and composed from these helpers; the uniqueness phase (which needs a
//! repository read) lives in the db crate.

use serde::Serialize;

/// A single failed constraint on one field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field the rule was evaluated against (e.g. `"name"`).
    pub field: &'static str,
    /// Simple entity type name (e.g. `"Make"`).
    pub entity: &'static str,
    /// The offending value, rendered to text. `None` when the field was absent.
    pub rejected_value: Option<String>,
    pub message: String,
}

fn violation(
    field: &'static str,
    entity: &'static str,
    rejected_value: Option<String>,
    message: String,
) -> FieldViolation {
    FieldViolation {
        field,
        entity,
        rejected_value,
        message,
    }
}

/// Fails when the value is absent.
pub fn required<T>(
    field: &'static str,
    entity: &'static str,
    value: Option<&T>,
    message: &str,
) -> Option<FieldViolation> {
    match value {
        Some(_) => None,
        None => Some(violation(field, entity, None, message.to_string())),
    }
}

/// Fails when the string is absent, empty, or whitespace-only.
pub fn not_blank(
    field: &'static str,
    entity: &'static str,
    value: Option<&str>,
    message: &str,
) -> Option<FieldViolation> {
    match value {
        Some(s) if !s.trim().is_empty() => None,
        other => Some(violation(
            field,
            entity,
            other.map(str::to_string),
            message.to_string(),
        )),
    }
}

/// Fails when the string is present and longer than `max` characters.
/// Absence is not this rule's concern.
pub fn max_length(
    field: &'static str,
    entity: &'static str,
    value: Option<&str>,
    max: usize,
    message: &str,
) -> Option<FieldViolation> {
    let s = value?;
    if s.chars().count() > max {
        Some(violation(field, entity, Some(s.to_string()), message.to_string()))
    } else {
        None
    }
}

/// Fails when the number is present and not strictly positive.
pub fn positive(
    field: &'static str,
    entity: &'static str,
    value: Option<i32>,
    message: &str,
) -> Option<FieldViolation> {
    let n = value?;
    if n > 0 {
        None
    } else {
        Some(violation(field, entity, Some(n.to_string()), message.to_string()))
    }
}
