//! Route definitions for the `/makes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::make;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(make::list).post(make::create))
        .route(
            "/{id}",
            get(make::get_by_id).patch(make::update).delete(make::delete),
        )
}
