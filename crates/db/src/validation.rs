//! Two-phase entity validation.
//!
//! Phase one evaluates the declarative field constraints; phase two checks
//! name uniqueness against the repository. Both phases always run, so the
//! caller sees every problem in one round-trip. Uniqueness here is a
//! best-effort pre-check: under concurrent creates the `uq_*` index is the
//! final authority and the resulting conflict is translated at the service
//! boundary.

use garage_core::error::CoreError;
use garage_core::types::DbId;
use garage_core::validation::{max_length, not_blank, positive, required, FieldViolation};
use sqlx::PgExecutor;

use crate::models::car::CarDraft;
use crate::models::category::CategoryDraft;
use crate::models::make::MakeDraft;
use crate::repositories::{CategoryRepo, MakeRepo};

const MAX_NAME_LENGTH: usize = 255;

/// Field constraints for a make: `name` non-blank, at most 255 characters.
pub fn make_violations(draft: &MakeDraft) -> Vec<FieldViolation> {
    let name = draft.name.as_deref();
    [
        not_blank("name", "Make", name, "Make name must not be blank"),
        max_length(
            "name",
            "Make",
            name,
            MAX_NAME_LENGTH,
            "Make name must be less than 255 characters",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Field constraints for a category: `name` non-blank, at most 255 characters.
pub fn category_violations(draft: &CategoryDraft) -> Vec<FieldViolation> {
    let name = draft.name.as_deref();
    [
        not_blank("name", "Category", name, "Category name must not be blank"),
        max_length(
            "name",
            "Category",
            name,
            MAX_NAME_LENGTH,
            "Category name must be less than 255 characters",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Field constraints for a car: make required, year required and positive,
/// model required and at most 255 characters.
pub fn car_violations(draft: &CarDraft) -> Vec<FieldViolation> {
    [
        required("make", "Car", draft.make_id.as_ref(), "Car make must not be null"),
        required("year", "Car", draft.year.as_ref(), "Car year must not be null"),
        positive("year", "Car", draft.year, "Car year must be positive"),
        required(
            "model",
            "Car",
            draft.model.as_ref(),
            "Car model must not be null",
        ),
        max_length(
            "model",
            "Car",
            draft.model.as_deref(),
            MAX_NAME_LENGTH,
            "Car model must be less than 255 characters",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Decide whether an existing row under the same name conflicts with the
/// candidate. Same id means self-update, which passes; a different id, or a
/// candidate with no id yet, is a conflict.
pub fn unique_name_violation(
    entity: &'static str,
    candidate_id: Option<DbId>,
    name: &str,
    existing_id: Option<DbId>,
) -> Option<FieldViolation> {
    match existing_id {
        Some(existing) if candidate_id != Some(existing) => Some(FieldViolation {
            field: "name",
            entity,
            rejected_value: Some(name.to_string()),
            message: format!("{entity} with name = {name}, already exists."),
        }),
        _ => None,
    }
}

/// Validate a make draft: field constraints plus name uniqueness.
pub async fn validate_make(
    exec: impl PgExecutor<'_>,
    draft: &MakeDraft,
) -> Result<(), CoreError> {
    let mut violations = make_violations(draft);
    if let Some(name) = draft.name.as_deref() {
        let existing = MakeRepo::find_by_name(exec, name)
            .await
            .map_err(|e| CoreError::Internal(format!("uniqueness lookup failed: {e}")))?;
        violations.extend(unique_name_violation(
            "Make",
            draft.id,
            name,
            existing.map(|m| m.id),
        ));
    }
    fail_on_violations("Make", violations)
}

/// Validate a category draft: field constraints plus name uniqueness.
pub async fn validate_category(
    exec: impl PgExecutor<'_>,
    draft: &CategoryDraft,
) -> Result<(), CoreError> {
    let mut violations = category_violations(draft);
    if let Some(name) = draft.name.as_deref() {
        let existing = CategoryRepo::find_by_name(exec, name)
            .await
            .map_err(|e| CoreError::Internal(format!("uniqueness lookup failed: {e}")))?;
        violations.extend(unique_name_violation(
            "Category",
            draft.id,
            name,
            existing.map(|c| c.id),
        ));
    }
    fail_on_violations("Category", violations)
}

/// Validate a car draft. Cars have no natural-key uniqueness, so only the
/// field constraints run.
pub fn validate_car(draft: &CarDraft) -> Result<(), CoreError> {
    fail_on_violations("Car", car_violations(draft))
}

fn fail_on_violations(
    entity: &'static str,
    violations: Vec<FieldViolation>,
) -> Result<(), CoreError> {
    if violations.is_empty() {
        Ok(())
    } else {
        tracing::info!(entity, count = violations.len(), "entity validation failed");
        Err(CoreError::Validation { entity, violations })
    }
}
