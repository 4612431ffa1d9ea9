//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use garage_core::types::DbId;

use crate::dto::CategoryDto;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::SearchResponse;
use crate::services::CategoryService;
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<CategoryDto>,
) -> AppResult<(StatusCode, Json<DbId>)> {
    let id = CategoryService::create(&state.pool, dto).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<SearchResponse<CategoryDto>>> {
    let params = ListParams::from_pairs(pairs)?;
    let response = CategoryService::find_all(&state.pool, &params).await?;
    Ok(Json(response))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CategoryDto>> {
    let dto = CategoryService::find_by_id(&state.pool, id).await?;
    Ok(Json(dto))
}

/// PATCH /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(dto): Json<CategoryDto>,
) -> AppResult<Json<CategoryDto>> {
    let updated = CategoryService::update(&state.pool, dto, id).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    CategoryService::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
