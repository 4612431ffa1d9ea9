//! Repository for the `cars` table, its category links, and the filtered
//! search of the catalog.

use garage_core::types::{CarId, DbId};
use sqlx::{PgConnection, PgExecutor};

use crate::models::car::{Car, CarCategoryRow, CarDraft, CarSearchFilter, CarWithMake};
use crate::models::category::Category;
use crate::paging::PageRequest;

const COLUMNS: &str = "id, make_id, year, model";

const SEARCH_COLUMNS: &str = "c.id, c.make_id, m.name AS make_name, c.year, c.model";

/// Shared predicate for the filtered search and its count query.
///
/// Every filter is independently optional: a NULL parameter disables its
/// clause. The category clause compares the count of the car's categories
/// whose name is in the requested list against the expected count, so a car
/// matches only when it carries every requested category (extra categories
/// are permitted). A NULL expected count with a non-NULL name list can never
/// be equal to the aggregate, which makes the filter never-matching.
const SEARCH_PREDICATE: &str = "($1::text IS NULL OR m.name = $1) \
     AND ($2::int4 IS NULL OR c.year = $2) \
     AND ($3::text IS NULL OR c.model = $3) \
     AND ($4::text[] IS NULL OR \
          (SELECT COUNT(*) FROM cars_categories cc \
           JOIN categories cat ON cat.id = cc.category_id \
           WHERE cc.car_id = c.id AND cat.name = ANY ($4)) = $5::int8)";

/// Provides CRUD operations for cars plus the category-set filtered search.
pub struct CarRepo;

impl CarRepo {
    pub const SORT_COLUMNS: &'static [&'static str] = &["id", "year", "model"];

    /// Insert a new car, returning the created row.
    ///
    /// Uses the caller-supplied id when the draft carries one, otherwise the
    /// database generates one.
    pub async fn insert(exec: impl PgExecutor<'_>, draft: &CarDraft) -> Result<Car, sqlx::Error> {
        match draft.id {
            Some(id) => {
                let query = format!(
                    "INSERT INTO cars (id, make_id, year, model) \
                     VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Car>(&query)
                    .bind(id)
                    .bind(draft.make_id)
                    .bind(draft.year)
                    .bind(&draft.model)
                    .fetch_one(exec)
                    .await
            }
            None => {
                let query = format!(
                    "INSERT INTO cars (make_id, year, model) \
                     VALUES ($1, $2, $3) RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Car>(&query)
                    .bind(draft.make_id)
                    .bind(draft.year)
                    .bind(&draft.model)
                    .fetch_one(exec)
                    .await
            }
        }
    }

    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: CarId,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    pub async fn exists_by_id(exec: impl PgExecutor<'_>, id: CarId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM cars WHERE id = $1)")
            .bind(id)
            .fetch_one(exec)
            .await
    }

    pub async fn update(
        exec: impl PgExecutor<'_>,
        id: CarId,
        draft: &CarDraft,
    ) -> Result<Car, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET make_id = $2, year = $3, model = $4 \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(draft.make_id)
            .bind(draft.year)
            .bind(&draft.model)
            .fetch_one(exec)
            .await
    }

    /// Delete a car by id. Join rows cascade. Returns `true` if a row was
    /// removed.
    pub async fn delete(exec: impl PgExecutor<'_>, id: CarId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the car's category set. Runs two statements, so it takes a
    /// connection and belongs inside the caller's transaction.
    pub async fn set_categories(
        conn: &mut PgConnection,
        car_id: CarId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM cars_categories WHERE car_id = $1")
            .bind(car_id)
            .execute(&mut *conn)
            .await?;
        if !category_ids.is_empty() {
            sqlx::query(
                "INSERT INTO cars_categories (car_id, category_id) \
                 SELECT $1, unnest($2::int8[])",
            )
            .bind(car_id)
            .bind(category_ids)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// The car's current category ids, ordered for stable merges.
    pub async fn category_ids_for_car(
        exec: impl PgExecutor<'_>,
        car_id: CarId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT category_id FROM cars_categories WHERE car_id = $1 ORDER BY category_id",
        )
        .bind(car_id)
        .fetch_all(exec)
        .await
    }

    pub async fn categories_for_car(
        exec: impl PgExecutor<'_>,
        car_id: CarId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT cat.id, cat.name FROM cars_categories cc \
             JOIN categories cat ON cat.id = cc.category_id \
             WHERE cc.car_id = $1 ORDER BY cat.id",
        )
        .bind(car_id)
        .fetch_all(exec)
        .await
    }

    /// Batch lookup of categories for a page of cars.
    pub async fn categories_for_cars(
        exec: impl PgExecutor<'_>,
        car_ids: &[CarId],
    ) -> Result<Vec<CarCategoryRow>, sqlx::Error> {
        sqlx::query_as::<_, CarCategoryRow>(
            "SELECT cc.car_id, cat.id, cat.name FROM cars_categories cc \
             JOIN categories cat ON cat.id = cc.category_id \
             WHERE cc.car_id = ANY ($1) ORDER BY cc.car_id, cat.id",
        )
        .bind(car_ids)
        .fetch_all(exec)
        .await
    }

    /// One page of cars matching the filter, joined with their make's name.
    pub async fn search(
        exec: impl PgExecutor<'_>,
        filter: &CarSearchFilter,
        page: &PageRequest,
    ) -> Result<Vec<CarWithMake>, sqlx::Error> {
        let query = format!(
            "SELECT {SEARCH_COLUMNS} FROM cars c \
             JOIN makes m ON m.id = c.make_id \
             WHERE {SEARCH_PREDICATE} \
             ORDER BY {} LIMIT $6 OFFSET $7",
            page.order_by_sql()
        );
        sqlx::query_as::<_, CarWithMake>(&query)
            .bind(&filter.make_name)
            .bind(filter.year)
            .bind(&filter.model)
            .bind(&filter.category_names)
            .bind(filter.expected_category_count)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(exec)
            .await
    }

    /// Total number of cars matching the filter, for the page envelope.
    pub async fn count_search(
        exec: impl PgExecutor<'_>,
        filter: &CarSearchFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM cars c \
             JOIN makes m ON m.id = c.make_id \
             WHERE {SEARCH_PREDICATE}"
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.make_name)
            .bind(filter.year)
            .bind(&filter.model)
            .bind(&filter.category_names)
            .bind(filter.expected_category_count)
            .fetch_one(exec)
            .await
    }
}
