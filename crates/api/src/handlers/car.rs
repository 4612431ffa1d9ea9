//! Handlers for the `/cars` resource.
//!
//! The list endpoint is the filtered search: optional equality filters on
//! make name, year, and model, plus a repeatable `category` parameter that
//! requires the car to carry every named category.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use garage_core::types::CarId;

use crate::dto::CarDto;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::SearchResponse;
use crate::services::CarService;
use crate::state::AppState;

/// POST /api/v1/cars
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<CarDto>,
) -> AppResult<(StatusCode, Json<CarId>)> {
    let id = CarService::create(&state.pool, dto).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// GET /api/v1/cars?make=&year=&model=&category=&category=...
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<SearchResponse<CarDto>>> {
    let params = ListParams::from_pairs(pairs)?;
    let response = CarService::find_all(&state.pool, &params).await?;
    Ok(Json(response))
}

/// GET /api/v1/cars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<CarId>,
) -> AppResult<Json<CarDto>> {
    let dto = CarService::find_by_id(&state.pool, id).await?;
    Ok(Json(dto))
}

/// PATCH /api/v1/cars/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<CarId>,
    Json(dto): Json<CarDto>,
) -> AppResult<Json<CarDto>> {
    let updated = CarService::update(&state.pool, dto, id).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/cars/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<CarId>,
) -> AppResult<StatusCode> {
    CarService::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
