//! Handlers for the `/makes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use garage_core::types::DbId;

use crate::dto::MakeDto;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::SearchResponse;
use crate::services::MakeService;
use crate::state::AppState;

/// POST /api/v1/makes
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<MakeDto>,
) -> AppResult<(StatusCode, Json<DbId>)> {
    let id = MakeService::create(&state.pool, dto).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// GET /api/v1/makes
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<SearchResponse<MakeDto>>> {
    let params = ListParams::from_pairs(pairs)?;
    let response = MakeService::find_all(&state.pool, &params).await?;
    Ok(Json(response))
}

/// GET /api/v1/makes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MakeDto>> {
    let dto = MakeService::find_by_id(&state.pool, id).await?;
    Ok(Json(dto))
}

/// PATCH /api/v1/makes/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(dto): Json<MakeDto>,
) -> AppResult<Json<MakeDto>> {
    let updated = MakeService::update(&state.pool, dto, id).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/makes/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    MakeService::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
