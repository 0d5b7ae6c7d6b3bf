use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.nylas.com";

const AUTHORIZE_PATH: &str = "/oauth/authorize";

const DEFAULT_SCOPES: &[&str] = &["email", "calendar", "contacts"];

/// Returned when a provider or response type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    #[default]
    Code,
    Token,
}

impl ResponseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Code => "code",
            ResponseType::Token => "token",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "code" => Ok(ResponseType::Code),
            "token" => Ok(ResponseType::Token),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Mail/calendar service the account being connected lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    ICloud,
    Gmail,
    Office365,
    Exchange,
    Imap,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::ICloud => "icloud",
            Provider::Gmail => "gmail",
            Provider::Office365 => "office365",
            Provider::Exchange => "exchange",
            Provider::Imap => "imap",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "icloud" => Ok(Provider::ICloud),
            "gmail" => Ok(Provider::Gmail),
            "office365" => Ok(Provider::Office365),
            "exchange" => Ok(Provider::Exchange),
            "imap" => Ok(Provider::Imap),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Parameters used to start connecting an account through hosted authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostedAuthorizeRequest {
    pub redirect_uri: String,
    pub login_hint: String,
    pub state: String,
    /// Empty means `email,calendar,contacts`.
    pub scopes: Vec<String>,
    pub provider: Option<Provider>,
    /// Not sent: the authorize URL always asks for `response_type=code`.
    pub response_type: ResponseType,
    pub redirect_on_error: Option<bool>,
}

/// Application credentials and API location shared by every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
    client_id: String,
    base_url: String,
}

impl Client {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL a user agent is sent to in order to connect an account.
    ///
    /// `redirect_uri`, `client_id`, `response_type`, `login_hint` and `state`
    /// are always present, even when empty. `provider` and
    /// `redirect_on_error` only appear when set. Inputs are not validated.
    pub fn hosted_authentication_url(&self, request: &HostedAuthorizeRequest) -> String {
        let scopes = if request.scopes.is_empty() {
            DEFAULT_SCOPES.join(",")
        } else {
            request.scopes.join(",")
        };

        let mut qs = form_urlencoded::Serializer::new(String::new());
        qs.append_pair("redirect_uri", &request.redirect_uri)
            .append_pair("client_id", &self.client_id)
            .append_pair("response_type", ResponseType::Code.as_str())
            .append_pair("login_hint", &request.login_hint)
            .append_pair("state", &request.state);

        if !scopes.is_empty() {
            qs.append_pair("scopes", &scopes);
        }

        if let Some(provider) = request.provider {
            qs.append_pair("provider", provider.as_str());
        }

        if let Some(redirect_on_error) = request.redirect_on_error {
            qs.append_pair("redirect_on_error", &redirect_on_error.to_string());
        }

        format!("{}{}?{}", self.base_url, AUTHORIZE_PATH, qs.finish())
    }
}
