//! Route composition.

pub mod car;
pub mod category;
pub mod health;
pub mod make;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /makes             list, create
/// /makes/{id}        get, update, delete
/// /categories        list, create
/// /categories/{id}   get, update, delete
/// /cars              filtered search, create
/// /cars/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/makes", make::router())
        .nest("/categories", category::router())
        .nest("/cars", car::router())
}
