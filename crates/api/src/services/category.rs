//! CRUD orchestration for categories.

use garage_core::error::CoreError;
use garage_core::types::DbId;
use garage_db::paging::PageRequest;
use garage_db::repositories::CategoryRepo;
use garage_db::validation::validate_category;
use garage_db::DbPool;

use crate::convert::{category_draft, category_to_dto};
use crate::dto::CategoryDto;
use crate::error::AppResult;
use crate::query::ListParams;
use crate::response::SearchResponse;

pub struct CategoryService;

impl CategoryService {
    /// Validate and persist a new category, returning the assigned id.
    pub async fn create(pool: &DbPool, dto: CategoryDto) -> AppResult<DbId> {
        let draft = category_draft(&dto);

        let mut tx = pool.begin().await?;
        validate_category(&mut *tx, &draft).await?;
        if let Some(id) = draft.id {
            if CategoryRepo::exists_by_id(&mut *tx, id).await? {
                return Err(CoreError::AlreadyExists(format!(
                    "Category with id = {id} already exists"
                ))
                .into());
            }
        }
        let category = CategoryRepo::insert(&mut *tx, &draft).await?;
        tx.commit().await?;

        tracing::info!(id = category.id, name = %category.name, "saved category");
        Ok(category.id)
    }

    /// Load, merge (skip-null), re-validate, and persist.
    pub async fn update(pool: &DbPool, dto: CategoryDto, id: DbId) -> AppResult<CategoryDto> {
        let mut tx = pool.begin().await?;
        let current = CategoryRepo::find_by_id(&mut *tx, id).await?.ok_or_else(|| {
            CoreError::NotFound(format!("There is no Category to update with id = {id}"))
        })?;

        let merged = current.apply(category_draft(&dto));
        validate_category(&mut *tx, &merged).await?;
        let updated = CategoryRepo::update(&mut *tx, id, &merged).await?;
        tx.commit().await?;

        tracing::info!(id, "updated category");
        Ok(category_to_dto(&updated))
    }

    pub async fn delete_by_id(pool: &DbPool, id: DbId) -> AppResult<()> {
        if !CategoryRepo::delete(pool, id).await? {
            return Err(CoreError::NotFound(format!(
                "There is no Category to delete with id = {id}"
            ))
            .into());
        }
        tracing::info!(id, "deleted category");
        Ok(())
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> AppResult<CategoryDto> {
        let category = CategoryRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("There is no Category with id = {id}")))?;
        tracing::debug!(id, "retrieved category");
        Ok(category_to_dto(&category))
    }

    pub async fn find_all(
        pool: &DbPool,
        params: &ListParams,
    ) -> AppResult<SearchResponse<CategoryDto>> {
        let page = PageRequest::new(
            params.limit,
            params.offset,
            &params.sort,
            CategoryRepo::SORT_COLUMNS,
        )?;

        let categories = CategoryRepo::list(pool, &page).await?;
        let total = CategoryRepo::count(pool).await?;
        tracing::debug!(count = categories.len(), "retrieved categories");

        Ok(SearchResponse {
            offset: page.offset,
            limit: page.limit,
            total,
            sort: page.sort_description(),
            data: categories.iter().map(category_to_dto).collect(),
        })
    }
}
