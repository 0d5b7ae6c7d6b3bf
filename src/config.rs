use std::env;

use crate::{
    error::ConfigError,
    hosted_auth::{Client, DEFAULT_BASE_URL},
};

/// Settings for the redirect front-end, read from `HOSTED_AUTH_*` variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    pub api_url: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub redirect_on_error: Option<bool>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let client_id = required("HOSTED_AUTH_CLIENT_ID")?;
        let redirect_uri = required("HOSTED_AUTH_REDIRECT_URI")?;

        let api_url = lookup("HOSTED_AUTH_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let scopes = lookup("HOSTED_AUTH_SCOPES")
            .map(|v| split_scopes(&v))
            .unwrap_or_default();

        let redirect_on_error = match lookup("HOSTED_AUTH_REDIRECT_ON_ERROR").as_deref() {
            None | Some("") => None,
            Some(v) => Some(v.parse::<bool>().map_err(|_| ConfigError::Invalid {
                var: "HOSTED_AUTH_REDIRECT_ON_ERROR",
                reason: format!("expected true or false, got {v:?}"),
            })?),
        };

        Ok(Self {
            client_id,
            api_url,
            redirect_uri,
            scopes,
            redirect_on_error,
        })
    }

    pub fn client(&self) -> Client {
        Client::new(self.client_id.clone()).with_base_url(self.api_url.clone())
    }
}

/// Split a comma separated scope list, dropping blank entries.
pub fn split_scopes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("HOSTED_AUTH_CLIENT_ID", "abc123"),
            ("HOSTED_AUTH_REDIRECT_URI", "https://app.example.com/cb"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.nylas.com");
        assert!(config.scopes.is_empty());
        assert_eq!(config.redirect_on_error, None);
        assert_eq!(config.client().client_id(), "abc123");
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_lookup(lookup(&[
            ("HOSTED_AUTH_CLIENT_ID", "abc123"),
            ("HOSTED_AUTH_REDIRECT_URI", "https://app.example.com/cb"),
            ("HOSTED_AUTH_API_URL", "https://eu.api.example.com"),
            ("HOSTED_AUTH_SCOPES", "email.read_only, calendar ,,"),
            ("HOSTED_AUTH_REDIRECT_ON_ERROR", "false"),
        ]))
        .unwrap();

        assert_eq!(config.client().base_url(), "https://eu.api.example.com");
        assert_eq!(config.scopes, vec!["email.read_only", "calendar"]);
        assert_eq!(config.redirect_on_error, Some(false));
    }

    #[test]
    fn test_missing_client_id() {
        let err = Config::from_lookup(lookup(&[(
            "HOSTED_AUTH_REDIRECT_URI",
            "https://app.example.com/cb",
        )]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("HOSTED_AUTH_CLIENT_ID"));
    }

    #[test]
    fn test_blank_redirect_uri_is_missing() {
        let err = Config::from_lookup(lookup(&[
            ("HOSTED_AUTH_CLIENT_ID", "abc123"),
            ("HOSTED_AUTH_REDIRECT_URI", "  "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("HOSTED_AUTH_REDIRECT_URI"));
    }

    #[test]
    fn test_invalid_redirect_on_error() {
        let err = Config::from_lookup(lookup(&[
            ("HOSTED_AUTH_CLIENT_ID", "abc123"),
            ("HOSTED_AUTH_REDIRECT_URI", "https://app.example.com/cb"),
            ("HOSTED_AUTH_REDIRECT_ON_ERROR", "yes"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "HOSTED_AUTH_REDIRECT_ON_ERROR",
                ..
            }
        ));
    }
}
