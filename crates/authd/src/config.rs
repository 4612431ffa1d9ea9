/// Proxy configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AuthdConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Identity provider settings.
    pub idp: IdpConfig,
}

/// Everything needed to build a password-grant request against the identity
/// provider. Client credentials are attached server-side so they never leave
/// this service.
#[derive(Debug, Clone)]
pub struct IdpConfig {
    /// Full URL of the provider's token endpoint, e.g.
    /// `https://tenant.auth0.com/oauth/token`.
    pub token_url: String,
    /// API audience the requested token is for.
    pub audience: String,
    pub client_id: String,
    pub client_secret: String,
}

impl AuthdConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var             | Required | Default   |
    /// |---------------------|----------|-----------|
    /// | `AUTHD_HOST`        | no       | `0.0.0.0` |
    /// | `AUTHD_PORT`        | no       | `3001`    |
    /// | `IDP_TOKEN_URL`     | **yes**  | --        |
    /// | `IDP_AUDIENCE`      | **yes**  | --        |
    /// | `IDP_CLIENT_ID`     | **yes**  | --        |
    /// | `IDP_CLIENT_SECRET` | **yes**  | --        |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing.
    pub fn from_env() -> Self {
        let host = std::env::var("AUTHD_HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("AUTHD_PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("AUTHD_PORT must be a valid u16");

        let idp = IdpConfig {
            token_url: std::env::var("IDP_TOKEN_URL").expect("IDP_TOKEN_URL must be set"),
            audience: std::env::var("IDP_AUDIENCE").expect("IDP_AUDIENCE must be set"),
            client_id: std::env::var("IDP_CLIENT_ID").expect("IDP_CLIENT_ID must be set"),
            client_secret: std::env::var("IDP_CLIENT_SECRET")
                .expect("IDP_CLIENT_SECRET must be set"),
        };

        Self { host, port, idp }
    }
}
