//! Redirect target configuration.
//!
//! The browser bundle bakes its values in at compile time
//! ([`RedirectConfig::builtin`]); native tools read the same variable names
//! at runtime ([`RedirectConfig::from_env`]). Either way the value is built
//! once and handed to the gate, never mutated afterwards.

use url::Url;

use crate::error::GateError;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://idp.pingidentity.com/authorize";
pub const DEFAULT_CLIENT_ID: &str = "site-b-client-id";
pub const DEFAULT_SCOPE: &str = "openid profile";
pub const DEFAULT_REDIRECT_URI: &str = "https://siteb.com/callback";
pub const DEFAULT_LANDING_PAGE: &str = "https://siteb.com/landing";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_TOKEN_KEY: &str = "id_token";

pub const ENV_AUTHORIZE_URL: &str = "SITE_B_AUTHORIZE_URL";
pub const ENV_CLIENT_ID: &str = "SITE_B_CLIENT_ID";
pub const ENV_SCOPE: &str = "SITE_B_SCOPE";
pub const ENV_REDIRECT_URI: &str = "SITE_B_REDIRECT_URI";
pub const ENV_LANDING_PAGE: &str = "SITE_B_LANDING_PAGE";
pub const ENV_LOGIN_PATH: &str = "SITE_A_LOGIN_PATH";
pub const ENV_TOKEN_KEY: &str = "SITE_A_TOKEN_KEY";

/// Where an authenticated user is sent, and where everyone else goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectConfig {
    /// Identity provider authorization endpoint.
    pub authorize_url: String,
    /// Site B's OAuth client identifier.
    pub client_id: String,
    /// Space-separated scope list.
    pub scope: String,
    /// Site B callback registered with the identity provider.
    pub redirect_uri: String,
    /// Post-login page on Site B, passed opaquely as `state`.
    pub landing_page: String,
    /// Site A login path used when no valid token is cached.
    pub login_path: String,
    /// Storage key holding the cached ID token.
    pub token_key: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            authorize_url: DEFAULT_AUTHORIZE_URL.to_owned(),
            client_id: DEFAULT_CLIENT_ID.to_owned(),
            scope: DEFAULT_SCOPE.to_owned(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_owned(),
            landing_page: DEFAULT_LANDING_PAGE.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

impl RedirectConfig {
    /// Configuration fixed when the crate was compiled.
    ///
    /// Each field takes its `SITE_*` build environment variable when set and
    /// the crate default otherwise.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            authorize_url: option_env!("SITE_B_AUTHORIZE_URL").unwrap_or(DEFAULT_AUTHORIZE_URL).to_owned(),
            client_id: option_env!("SITE_B_CLIENT_ID").unwrap_or(DEFAULT_CLIENT_ID).to_owned(),
            scope: option_env!("SITE_B_SCOPE").unwrap_or(DEFAULT_SCOPE).to_owned(),
            redirect_uri: option_env!("SITE_B_REDIRECT_URI").unwrap_or(DEFAULT_REDIRECT_URI).to_owned(),
            landing_page: option_env!("SITE_B_LANDING_PAGE").unwrap_or(DEFAULT_LANDING_PAGE).to_owned(),
            login_path: option_env!("SITE_A_LOGIN_PATH").unwrap_or(DEFAULT_LOGIN_PATH).to_owned(),
            token_key: option_env!("SITE_A_TOKEN_KEY").unwrap_or(DEFAULT_TOKEN_KEY).to_owned(),
        }
    }

    /// Build configuration from runtime environment variables.
    ///
    /// Optional (defaults in parentheses):
    /// - `SITE_B_AUTHORIZE_URL` (`https://idp.pingidentity.com/authorize`)
    /// - `SITE_B_CLIENT_ID` (`site-b-client-id`)
    /// - `SITE_B_SCOPE` (`openid profile`)
    /// - `SITE_B_REDIRECT_URI` (`https://siteb.com/callback`)
    /// - `SITE_B_LANDING_PAGE` (`https://siteb.com/landing`)
    /// - `SITE_A_LOGIN_PATH` (`/login`)
    /// - `SITE_A_TOKEN_KEY` (`id_token`)
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ConfigParse`] if a variable is set but blank, and
    /// [`GateError::InvalidAuthorizeUrl`] if the endpoint does not parse.
    pub fn from_env() -> Result<Self, GateError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`RedirectConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let field = |key: &str, default: &str| -> Result<String, GateError> {
            match lookup(key) {
                None => Ok(default.to_owned()),
                Some(raw) if raw.trim().is_empty() => Err(GateError::ConfigParse(format!("{key} is set but empty"))),
                Some(raw) => Ok(raw.trim().to_owned()),
            }
        };

        let config = Self {
            authorize_url: field(ENV_AUTHORIZE_URL, DEFAULT_AUTHORIZE_URL)?,
            client_id: field(ENV_CLIENT_ID, DEFAULT_CLIENT_ID)?,
            scope: field(ENV_SCOPE, DEFAULT_SCOPE)?,
            redirect_uri: field(ENV_REDIRECT_URI, DEFAULT_REDIRECT_URI)?,
            landing_page: field(ENV_LANDING_PAGE, DEFAULT_LANDING_PAGE)?,
            login_path: field(ENV_LOGIN_PATH, DEFAULT_LOGIN_PATH)?,
            token_key: field(ENV_TOKEN_KEY, DEFAULT_TOKEN_KEY)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the values the gate relies on.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidAuthorizeUrl`] when the endpoint is not an
    /// absolute `http`/`https` URL, and [`GateError::ConfigParse`] when a
    /// required field is blank.
    pub fn validate(&self) -> Result<(), GateError> {
        self.parsed_authorize_url()?;
        for (name, value) in [
            ("client_id", &self.client_id),
            ("login_path", &self.login_path),
            ("token_key", &self.token_key),
        ] {
            if value.trim().is_empty() {
                return Err(GateError::ConfigParse(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Parse the authorize endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidAuthorizeUrl`] when parsing fails or the
    /// scheme is not `http`/`https`.
    pub fn parsed_authorize_url(&self) -> Result<Url, GateError> {
        let invalid = |reason: String| GateError::InvalidAuthorizeUrl { url: self.authorize_url.clone(), reason };
        let url = Url::parse(&self.authorize_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme {other}"))),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
