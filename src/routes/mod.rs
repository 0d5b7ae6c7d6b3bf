mod callback;
mod connect;
mod health;

use axum::{middleware, routing::get, Router};

use crate::{middleware::no_store::no_store_middleware, state::AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .route("/connect", get(connect::handler))
        .route("/callback", get(callback::handler))
        .layer(middleware::from_fn(no_store_middleware))
        .with_state(state)
}
