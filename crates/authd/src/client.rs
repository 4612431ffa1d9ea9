//! HTTP client for the identity provider's token endpoint.

use serde::{Deserialize, Serialize};

use crate::config::IdpConfig;

/// Body of the password-grant request sent to the provider.
#[derive(Debug, Serialize)]
pub struct PasswordGrantRequest {
    pub grant_type: &'static str,
    pub username: String,
    pub password: String,
    pub audience: String,
    pub client_id: String,
    pub client_secret: String,
}

impl IdpConfig {
    /// Build a password-grant request for the given credentials.
    pub fn password_grant(&self, username: String, password: String) -> PasswordGrantRequest {
        PasswordGrantRequest {
            grant_type: "password",
            username,
            password,
            audience: self.audience.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}

/// Token response forwarded verbatim to the caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Errors from the identity provider client.
#[derive(Debug, thiserror::Error)]
pub enum IdpClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Identity provider error ({status}): {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw response body for the caller.
        body: String,
    },
}

/// HTTP client for a single identity provider.
#[derive(Clone)]
pub struct IdpClient {
    client: reqwest::Client,
    token_url: String,
}

impl IdpClient {
    pub fn new(token_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_url,
        }
    }

    /// Exchange credentials for a token via the password grant.
    pub async fn password_grant(
        &self,
        request: &PasswordGrantRequest,
    ) -> Result<TokenResponse, IdpClientError> {
        let response = self
            .client
            .post(&self.token_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdpClientError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<TokenResponse>().await?)
    }
}
