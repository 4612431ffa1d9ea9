//! CRUD orchestration for makes.

use garage_core::error::CoreError;
use garage_core::types::DbId;
use garage_db::paging::PageRequest;
use garage_db::repositories::MakeRepo;
use garage_db::validation::validate_make;
use garage_db::DbPool;

use crate::convert::{make_draft, make_to_dto};
use crate::dto::MakeDto;
use crate::error::AppResult;
use crate::query::ListParams;
use crate::response::SearchResponse;

pub struct MakeService;

impl MakeService {
    /// Validate and persist a new make, returning the assigned id.
    ///
    /// A caller-supplied id that already exists is rejected before any write.
    pub async fn create(pool: &DbPool, dto: MakeDto) -> AppResult<DbId> {
        let draft = make_draft(&dto);

        let mut tx = pool.begin().await?;
        validate_make(&mut *tx, &draft).await?;
        if let Some(id) = draft.id {
            if MakeRepo::exists_by_id(&mut *tx, id).await? {
                return Err(
                    CoreError::AlreadyExists(format!("Make with id = {id} already exists")).into(),
                );
            }
        }
        let make = MakeRepo::insert(&mut *tx, &draft).await?;
        tx.commit().await?;

        tracing::info!(id = make.id, name = %make.name, "saved make");
        Ok(make.id)
    }

    /// Load, merge (skip-null), re-validate, and persist.
    pub async fn update(pool: &DbPool, dto: MakeDto, id: DbId) -> AppResult<MakeDto> {
        let mut tx = pool.begin().await?;
        let current = MakeRepo::find_by_id(&mut *tx, id).await?.ok_or_else(|| {
            CoreError::NotFound(format!("There is no Make to update with id = {id}"))
        })?;

        let merged = current.apply(make_draft(&dto));
        validate_make(&mut *tx, &merged).await?;
        let updated = MakeRepo::update(&mut *tx, id, &merged).await?;
        tx.commit().await?;

        tracing::info!(id, "updated make");
        Ok(make_to_dto(&updated))
    }

    pub async fn delete_by_id(pool: &DbPool, id: DbId) -> AppResult<()> {
        if !MakeRepo::delete(pool, id).await? {
            return Err(CoreError::NotFound(format!(
                "There is no Make to delete with id = {id}"
            ))
            .into());
        }
        tracing::info!(id, "deleted make");
        Ok(())
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> AppResult<MakeDto> {
        let make = MakeRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("There is no Make with id = {id}")))?;
        tracing::debug!(id, "retrieved make");
        Ok(make_to_dto(&make))
    }

    pub async fn find_all(pool: &DbPool, params: &ListParams) -> AppResult<SearchResponse<MakeDto>> {
        let page = PageRequest::new(
            params.limit,
            params.offset,
            &params.sort,
            MakeRepo::SORT_COLUMNS,
        )?;

        let makes = MakeRepo::list(pool, &page).await?;
        let total = MakeRepo::count(pool).await?;
        tracing::debug!(count = makes.len(), "retrieved makes");

        Ok(SearchResponse {
            offset: page.offset,
            limit: page.limit,
            total,
            sort: page.sort_description(),
            data: makes.iter().map(make_to_dto).collect(),
        })
    }
}
