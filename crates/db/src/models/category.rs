//! Category entity model.

use garage_core::types::DbId;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// Candidate state for a category, before validation and persistence.
#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

impl Category {
    /// Skip-null merge, see [`crate::models::make::Make::apply`].
    pub fn apply(&self, patch: CategoryDraft) -> CategoryDraft {
        CategoryDraft {
            id: Some(self.id),
            name: patch.name.or_else(|| Some(self.name.clone())),
        }
    }
}
