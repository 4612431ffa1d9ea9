//! Token-exchange behaviour against a stub identity provider.
//!
//! The stub is a real axum server on an ephemeral port; the proxy router is
//! driven with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use garage_authd::client::IdpClient;
use garage_authd::config::{AuthdConfig, IdpConfig};
use garage_authd::router::build_app_router;
use garage_authd::state::AppState;

/// Stub provider: accepts the password grant only for the expected request
/// body, mirroring what a real tenant would check.
async fn stub_token_endpoint(Json(body): Json<serde_json::Value>) -> Response<Body> {
    assert_eq!(body["grant_type"], "password");
    assert_eq!(body["audience"], "https://garage.example.com/api");
    assert_eq!(body["client_id"], "test-client");
    assert_eq!(body["client_secret"], "test-secret");

    if body["username"] == "alice" && body["password"] == "correct-horse" {
        Json(serde_json::json!({
            "access_token": "stub-access-token",
            "scope": "openid profile",
            "expires_in": 86400,
            "token_type": "Bearer",
        }))
        .into_response()
    } else {
        (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "Wrong email or password.",
            })),
        )
            .into_response()
    }
}

/// Spawn the stub provider and return the proxy app pointed at it.
async fn proxy_against_stub() -> Router {
    let stub = Router::new().route("/oauth/token", post(stub_token_endpoint));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub).await.unwrap();
    });

    let config = AuthdConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        idp: IdpConfig {
            token_url: format!("http://{addr}/oauth/token"),
            audience: "https://garage.example.com/api".to_string(),
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
        },
    };
    let client = IdpClient::new(config.idp.token_url.clone());
    build_app_router(AppState {
        config: Arc::new(config),
        client,
    })
}

async fn post_token(app: Router, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_credentials_forward_the_token_response() {
    let app = proxy_against_stub().await;

    let response = post_token(
        app,
        serde_json::json!({ "username": "alice", "password": "correct-horse" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["access_token"], "stub-access-token");
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 86400);
    assert_eq!(json["scope"], "openid profile");
}

#[tokio::test]
async fn rejected_credentials_forward_the_upstream_status_and_body() {
    let app = proxy_against_stub().await;

    let response = post_token(
        app,
        serde_json::json!({ "username": "alice", "password": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "IDP_ERROR");
    assert_eq!(json["upstream"]["error"], "invalid_grant");
}

#[tokio::test]
async fn unreachable_provider_maps_to_502() {
    // Point the proxy at a port nothing listens on.
    let config = AuthdConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        idp: IdpConfig {
            token_url: "http://127.0.0.1:1/oauth/token".to_string(),
            audience: "https://garage.example.com/api".to_string(),
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
        },
    };
    let client = IdpClient::new(config.idp.token_url.clone());
    let app = build_app_router(AppState {
        config: Arc::new(config),
        client,
    });

    let response = post_token(
        app,
        serde_json::json!({ "username": "alice", "password": "correct-horse" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "IDP_UNREACHABLE");
}

#[tokio::test]
async fn health_is_always_ok() {
    let app = proxy_against_stub().await;
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
