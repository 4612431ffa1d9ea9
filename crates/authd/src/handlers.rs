//! Proxy handlers.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::client::TokenResponse;
use crate::error::AuthdError;
use crate::state::AppState;

/// Request body for `POST /token`.
#[derive(Debug, Deserialize)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
}

/// POST /token
///
/// Exchange user credentials for an access token from the identity provider.
/// The grant type, audience, and client credentials come from configuration;
/// the token response is forwarded verbatim.
pub async fn token(
    State(state): State<AppState>,
    Json(credentials): Json<UserCredentials>,
) -> Result<Json<TokenResponse>, AuthdError> {
    tracing::info!(username = %credentials.username, "token exchange requested");

    let request = state
        .config
        .idp
        .password_grant(credentials.username, credentials.password);
    let response = state.client.password_grant(&request).await?;

    Ok(Json(response))
}

/// GET /health -- liveness only, the proxy holds no state.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
