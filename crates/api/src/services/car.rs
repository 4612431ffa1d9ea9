//! CRUD orchestration and filtered search for cars.

use std::collections::HashMap;

use garage_core::error::CoreError;
use garage_core::types::CarId;
use garage_db::models::car::CarSearchFilter;
use garage_db::paging::PageRequest;
use garage_db::repositories::{CarRepo, MakeRepo};
use garage_db::DbPool;
use sqlx::PgConnection;

use crate::convert::{car_draft, car_to_dto, car_with_make_to_dto};
use crate::dto::{CarDto, CategoryDto};
use crate::error::AppResult;
use crate::query::ListParams;
use crate::response::SearchResponse;

pub struct CarService;

impl CarService {
    /// Validate and persist a new car with its category links, returning the
    /// assigned id.
    pub async fn create(pool: &DbPool, dto: CarDto) -> AppResult<CarId> {
        let draft = car_draft(&dto)?;
        garage_db::validation::validate_car(&draft)?;

        let mut tx = pool.begin().await?;
        if let Some(id) = draft.id {
            if CarRepo::exists_by_id(&mut *tx, id).await? {
                return Err(
                    CoreError::AlreadyExists(format!("Car with id = {id} already exists")).into(),
                );
            }
        }
        let car = CarRepo::insert(&mut *tx, &draft).await?;
        if let Some(category_ids) = &draft.category_ids {
            CarRepo::set_categories(&mut tx, car.id, category_ids).await?;
        }
        tx.commit().await?;

        tracing::info!(id = %car.id, model = %car.model, "saved car");
        Ok(car.id)
    }

    /// Load, merge (skip-null), re-validate, and persist. The category set is
    /// replaced only when the patch mentions categories.
    pub async fn update(pool: &DbPool, dto: CarDto, id: CarId) -> AppResult<CarDto> {
        let mut tx = pool.begin().await?;
        let current = CarRepo::find_by_id(&mut *tx, id).await?.ok_or_else(|| {
            CoreError::NotFound(format!("There is no Car to update with id = {id}"))
        })?;
        let current_categories = CarRepo::category_ids_for_car(&mut *tx, id).await?;

        let merged = current.apply(car_draft(&dto)?, current_categories);
        garage_db::validation::validate_car(&merged)?;

        let updated = CarRepo::update(&mut *tx, id, &merged).await?;
        if let Some(category_ids) = &merged.category_ids {
            CarRepo::set_categories(&mut tx, id, category_ids).await?;
        }
        let result = Self::load_dto(&mut tx, updated.id).await?.ok_or_else(|| {
            CoreError::Internal(format!("Car {id} disappeared during update"))
        })?;
        tx.commit().await?;

        tracing::info!(id = %id, "updated car");
        Ok(result)
    }

    pub async fn delete_by_id(pool: &DbPool, id: CarId) -> AppResult<()> {
        if !CarRepo::delete(pool, id).await? {
            return Err(CoreError::NotFound(format!(
                "There is no Car to delete with id = {id}"
            ))
            .into());
        }
        tracing::info!(id = %id, "deleted car");
        Ok(())
    }

    pub async fn find_by_id(pool: &DbPool, id: CarId) -> AppResult<CarDto> {
        let mut conn = pool.acquire().await?;
        let dto = Self::load_dto(&mut conn, id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("There is no Car with id = {id}")))?;
        tracing::debug!(id = %id, "retrieved car");
        Ok(dto)
    }

    /// Filtered, paged search over the catalog.
    ///
    /// The expected category count is the length of the requested list, so a
    /// car matches only when it carries every requested category.
    pub async fn find_all(pool: &DbPool, params: &ListParams) -> AppResult<SearchResponse<CarDto>> {
        let page = PageRequest::new(
            params.limit,
            params.offset,
            &params.sort,
            CarRepo::SORT_COLUMNS,
        )?;
        let filter = CarSearchFilter {
            make_name: params.make.clone(),
            year: params.year,
            model: params.model.clone(),
            expected_category_count: params.categories.as_ref().map(|c| c.len() as i64),
            category_names: params.categories.clone(),
        };

        let rows = CarRepo::search(pool, &filter, &page).await?;
        let total = CarRepo::count_search(pool, &filter).await?;

        let car_ids: Vec<CarId> = rows.iter().map(|r| r.id).collect();
        let mut categories_by_car: HashMap<CarId, Vec<CategoryDto>> = HashMap::new();
        for row in CarRepo::categories_for_cars(pool, &car_ids).await? {
            categories_by_car
                .entry(row.car_id)
                .or_default()
                .push(CategoryDto {
                    id: Some(row.id),
                    name: Some(row.name),
                });
        }
        tracing::debug!(count = rows.len(), total, "retrieved cars");

        let data = rows
            .iter()
            .map(|row| {
                let categories = categories_by_car.remove(&row.id).unwrap_or_default();
                car_with_make_to_dto(row, categories)
            })
            .collect();

        Ok(SearchResponse {
            offset: page.offset,
            limit: page.limit,
            total,
            sort: page.sort_description(),
            data,
        })
    }

    /// Assemble the full DTO (make and categories included) for one car.
    async fn load_dto(conn: &mut PgConnection, id: CarId) -> AppResult<Option<CarDto>> {
        let Some(car) = CarRepo::find_by_id(&mut *conn, id).await? else {
            return Ok(None);
        };
        let make = MakeRepo::find_by_id(&mut *conn, car.make_id)
            .await?
            .ok_or_else(|| {
                CoreError::Internal(format!("Make {} missing for car {}", car.make_id, car.id))
            })?;
        let categories = CarRepo::categories_for_car(&mut *conn, id).await?;
        Ok(Some(car_to_dto(&car, &make, &categories)))
    }
}
