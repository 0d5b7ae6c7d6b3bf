use axum::{
    extract::Query,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    state_token::{clear_state_cookie, extract_state_cookie},
};

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
    reason: Option<String>,
}

/// Landing point for the provider redirect. Checks `state` against the cookie
/// set by `/connect` and hands the authorization code back to the caller.
pub async fn handler(
    headers: HeaderMap,
    Query(params): Query<CallbackQuery>,
) -> Result<Response, AppError> {
    let expected = extract_state_cookie(&headers)
        .ok_or_else(|| AppError::Forbidden("missing state cookie".into()))?;

    let returned = params
        .state
        .as_deref()
        .ok_or_else(|| AppError::Forbidden("missing state".into()))?;

    if returned != expected {
        tracing::warn!("Hosted authentication state mismatch");
        return Err(AppError::Forbidden("state mismatch".into()));
    }

    if let Some(error) = params.error {
        let reason = params.reason.unwrap_or_default();
        tracing::info!(error = %error, reason = %reason, "Hosted authentication returned an error");
        let message = if reason.is_empty() {
            error
        } else {
            format!("{error}: {reason}")
        };
        // The token has been checked, so it is spent either way.
        return Ok((
            [(SET_COOKIE, clear_state_cookie())],
            AppError::BadRequest(message),
        )
            .into_response());
    }

    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("missing code".into()))?;

    tracing::debug!("Hosted authentication completed");

    Ok((
        [(SET_COOKIE, clear_state_cookie())],
        Json(json!({ "code": code })),
    )
        .into_response())
}
