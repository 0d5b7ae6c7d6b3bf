use std::sync::Arc;

use crate::{config::Config, hosted_auth::Client};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<Client>,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub redirect_on_error: Option<bool>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        tracing::info!(
            api_url = %config.api_url,
            redirect_uri = %config.redirect_uri,
            "Hosted authentication front-end configured"
        );

        Self {
            client: Arc::new(config.client()),
            redirect_uri: config.redirect_uri,
            scopes: config.scopes,
            redirect_on_error: config.redirect_on_error,
        }
    }
}
