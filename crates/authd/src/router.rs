//! Application router, shared by the binary and the integration tests.

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers;
use crate::state::AppState;

/// Build the proxy [`Router`]: the token exchange, a health check, tracing,
/// and panic recovery.
pub fn build_app_router(state: AppState) -> Router {
    Router::new()
        .route("/token", post(handlers::token))
        .route("/health", get(handlers::health))
        .layer(CatchPanicLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
