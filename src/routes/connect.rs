use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    config::split_scopes,
    error::AppError,
    hosted_auth::{HostedAuthorizeRequest, Provider},
    state::AppState,
    state_token::{generate_state_token, state_cookie},
};

#[derive(Debug, Default, Deserialize)]
pub struct ConnectQuery {
    login_hint: Option<String>,
    provider: Option<Provider>,
    redirect_on_error: Option<bool>,
    scopes: Option<String>,
}

/// Query values take precedence over the configured defaults.
fn authorize_request(
    state: &AppState,
    params: ConnectQuery,
    token: String,
) -> HostedAuthorizeRequest {
    let scopes = match params.scopes.as_deref() {
        Some(s) => split_scopes(s),
        None => state.scopes.clone(),
    };

    HostedAuthorizeRequest {
        redirect_uri: state.redirect_uri.clone(),
        login_hint: params.login_hint.unwrap_or_default(),
        state: token,
        scopes,
        provider: params.provider,
        redirect_on_error: params.redirect_on_error.or(state.redirect_on_error),
        ..Default::default()
    }
}

pub async fn handler(
    State(state): State<AppState>,
    Query(params): Query<ConnectQuery>,
) -> Result<Response, AppError> {
    let token = generate_state_token()?;
    let request = authorize_request(&state, params, token.clone());

    let url = state.client.hosted_authentication_url(&request);

    tracing::info!(
        provider = request.provider.map(|p| p.as_str()).unwrap_or("any"),
        scopes = request.scopes.len(),
        "Redirecting to hosted authentication"
    );

    Ok(([(SET_COOKIE, state_cookie(&token))], Redirect::temporary(&url)).into_response())
}
