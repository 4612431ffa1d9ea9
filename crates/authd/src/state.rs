use std::sync::Arc;

use crate::client::IdpClient;
use crate::config::AuthdConfig;

/// Shared application state for proxy handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AuthdConfig>,
    pub client: IdpClient,
}
