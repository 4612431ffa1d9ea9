//! Repository for the `makes` table.

use garage_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::make::{Make, MakeDraft};
use crate::paging::PageRequest;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for makes.
pub struct MakeRepo;

impl MakeRepo {
    /// Columns a caller may sort the list query by.
    pub const SORT_COLUMNS: &'static [&'static str] = &["id", "name"];

    /// Insert a new make, returning the created row.
    ///
    /// Uses the caller-supplied id when the draft carries one, otherwise the
    /// id comes from the table's sequence.
    pub async fn insert(exec: impl PgExecutor<'_>, draft: &MakeDraft) -> Result<Make, sqlx::Error> {
        match draft.id {
            Some(id) => {
                let query = format!("INSERT INTO makes (id, name) VALUES ($1, $2) RETURNING {COLUMNS}");
                sqlx::query_as::<_, Make>(&query)
                    .bind(id)
                    .bind(&draft.name)
                    .fetch_one(exec)
                    .await
            }
            None => {
                let query = format!("INSERT INTO makes (name) VALUES ($1) RETURNING {COLUMNS}");
                sqlx::query_as::<_, Make>(&query)
                    .bind(&draft.name)
                    .fetch_one(exec)
                    .await
            }
        }
    }

    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Make>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM makes WHERE id = $1");
        sqlx::query_as::<_, Make>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Look up a make by its natural key.
    pub async fn find_by_name(
        exec: impl PgExecutor<'_>,
        name: &str,
    ) -> Result<Option<Make>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM makes WHERE name = $1");
        sqlx::query_as::<_, Make>(&query)
            .bind(name)
            .fetch_optional(exec)
            .await
    }

    pub async fn exists_by_id(exec: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM makes WHERE id = $1)")
            .bind(id)
            .fetch_one(exec)
            .await
    }

    /// Persist a merged draft over an existing row.
    pub async fn update(
        exec: impl PgExecutor<'_>,
        id: DbId,
        draft: &MakeDraft,
    ) -> Result<Make, sqlx::Error> {
        let query = format!("UPDATE makes SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Make>(&query)
            .bind(id)
            .bind(&draft.name)
            .fetch_one(exec)
            .await
    }

    /// Delete a make by id. Returns `true` if a row was removed.
    pub async fn delete(exec: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM makes WHERE id = $1")
            .bind(id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One page of makes under the request's orderings.
    pub async fn list(
        exec: impl PgExecutor<'_>,
        page: &PageRequest,
    ) -> Result<Vec<Make>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM makes ORDER BY {} LIMIT $1 OFFSET $2",
            page.order_by_sql()
        );
        sqlx::query_as::<_, Make>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(exec)
            .await
    }

    pub async fn count(exec: impl PgExecutor<'_>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM makes")
            .fetch_one(exec)
            .await
    }
}
