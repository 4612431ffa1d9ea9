//! Repository for the `categories` table.

use garage_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::category::{Category, CategoryDraft};
use crate::paging::PageRequest;

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    pub const SORT_COLUMNS: &'static [&'static str] = &["id", "name"];

    pub async fn insert(
        exec: impl PgExecutor<'_>,
        draft: &CategoryDraft,
    ) -> Result<Category, sqlx::Error> {
        match draft.id {
            Some(id) => {
                let query =
                    format!("INSERT INTO categories (id, name) VALUES ($1, $2) RETURNING {COLUMNS}");
                sqlx::query_as::<_, Category>(&query)
                    .bind(id)
                    .bind(&draft.name)
                    .fetch_one(exec)
                    .await
            }
            None => {
                let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
                sqlx::query_as::<_, Category>(&query)
                    .bind(&draft.name)
                    .fetch_one(exec)
                    .await
            }
        }
    }

    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Look up a category by its natural key.
    pub async fn find_by_name(
        exec: impl PgExecutor<'_>,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(exec)
            .await
    }

    pub async fn exists_by_id(exec: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(exec)
            .await
    }

    pub async fn update(
        exec: impl PgExecutor<'_>,
        id: DbId,
        draft: &CategoryDraft,
    ) -> Result<Category, sqlx::Error> {
        let query = format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&draft.name)
            .fetch_one(exec)
            .await
    }

    /// Delete a category by id. Returns `true` if a row was removed.
    pub async fn delete(exec: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list(
        exec: impl PgExecutor<'_>,
        page: &PageRequest,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories ORDER BY {} LIMIT $1 OFFSET $2",
            page.order_by_sql()
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(exec)
            .await
    }

    pub async fn count(exec: impl PgExecutor<'_>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(exec)
            .await
    }
}
