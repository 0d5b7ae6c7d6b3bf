use axum::http::{header::COOKIE, HeaderMap};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::AppError;

pub const STATE_COOKIE_NAME: &str = "__hosted_auth_state";

const STATE_COOKIE_MAX_AGE_SECS: u32 = 600; // 10 minutes

/// Generate the opaque `state` value round-tripped through the provider.
pub fn generate_state_token() -> Result<String, AppError> {
    let mut bytes = [0u8; 32];
    getrandom::fill(&mut bytes)
        .map_err(|e| AppError::Internal(format!("Failed to generate state token: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

// Lax so the cookie survives the top-level redirect back from the provider.
pub fn state_cookie(token: &str) -> String {
    format!(
        "{STATE_COOKIE_NAME}={token}; Path=/; Max-Age={STATE_COOKIE_MAX_AGE_SECS}; SameSite=Lax; Secure; HttpOnly"
    )
}

pub fn clear_state_cookie() -> String {
    format!("{STATE_COOKIE_NAME}=; Path=/; Max-Age=0; SameSite=Lax; Secure; HttpOnly")
}

pub fn extract_state_cookie(headers: &HeaderMap) -> Option<String> {
    let prefix = format!("{STATE_COOKIE_NAME}=");
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .map(|s| s.trim())
        .find_map(|s| s.strip_prefix(prefix.as_str()))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
