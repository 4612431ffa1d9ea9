//! Make entity model.

use garage_core::types::DbId;
use sqlx::FromRow;

/// A row from the `makes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Make {
    pub id: DbId,
    pub name: String,
}

/// Candidate state for a make, before validation and persistence.
///
/// Fields are optional so the constraint evaluator can report missing values
/// instead of the request failing at deserialization.
#[derive(Debug, Clone, Default)]
pub struct MakeDraft {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

impl Make {
    /// Skip-null merge: fields present in the patch overwrite, absent fields
    /// keep their current values. The id always comes from the loaded row.
    pub fn apply(&self, patch: MakeDraft) -> MakeDraft {
        MakeDraft {
            id: Some(self.id),
            name: patch.name.or_else(|| Some(self.name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> Make {
        Make {
            id: 7,
            name: "Toyota".to_string(),
        }
    }

    #[test]
    fn apply_overwrites_present_fields() {
        let draft = current().apply(MakeDraft {
            id: None,
            name: Some("Honda".to_string()),
        });
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.name.as_deref(), Some("Honda"));
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let draft = current().apply(MakeDraft::default());
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.name.as_deref(), Some("Toyota"));
    }

    #[test]
    fn apply_ignores_patch_id() {
        let draft = current().apply(MakeDraft {
            id: Some(99),
            name: None,
        });
        assert_eq!(draft.id, Some(7));
    }
}
