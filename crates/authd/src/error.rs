use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::client::IdpClientError;

/// Error type for proxy handlers.
#[derive(Debug, thiserror::Error)]
pub enum AuthdError {
    #[error(transparent)]
    Idp(#[from] IdpClientError),
}

impl IntoResponse for AuthdError {
    fn into_response(self) -> Response {
        let AuthdError::Idp(err) = self;
        match err {
            // The provider answered: forward its status and body so the
            // caller sees why the exchange was refused.
            IdpClientError::Upstream { status, body } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                tracing::warn!(%status, "identity provider refused token exchange");
                let upstream: serde_json::Value =
                    serde_json::from_str(&body).unwrap_or(json!(body));
                let payload = json!({
                    "error": "Error while getting token from identity provider",
                    "code": "IDP_ERROR",
                    "upstream": upstream,
                });
                (status, axum::Json(payload)).into_response()
            }
            // We never reached the provider.
            IdpClientError::Request(err) => {
                tracing::error!(error = %err, "identity provider unreachable");
                let payload = json!({
                    "error": "Identity provider unreachable",
                    "code": "IDP_UNREACHABLE",
                });
                (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
            }
        }
    }
}
