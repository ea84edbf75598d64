//! The session gate: authenticate from the cached token, then redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The "Go to Site B" action calls [`SessionGate::initiate_site_b_transfer`].
//! Users without a live token go to Site A's login page; everyone else is
//! sent to the identity provider with Site B's client parameters.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to the UI. Token problems mean "not
//! authenticated"; URL or navigation failures become a notification.

use url::Url;

use crate::authorize::authorize_url;
use crate::capability::{Clock, Navigator, Notifier, TokenReader};
use crate::config::RedirectConfig;
use crate::error::GateError;
use crate::token::{self, TokenStatus};

/// Shown when the redirect could not be started.
pub const REDIRECT_FAILED_MESSAGE: &str = "Error redirecting to Site B. Please try again.";

/// Where a transfer attempt sends the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    /// No live token: Site A's login page.
    Login { path: String },
    /// Live token: the identity provider's authorization request.
    Authorize { url: Url },
}

impl Transfer {
    /// Navigation target.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Login { path } => path.as_str(),
            Self::Authorize { url } => url.as_str(),
        }
    }
}

/// Authentication check and Site B redirect over injected capabilities.
pub struct SessionGate<R, N, A, C> {
    config: RedirectConfig,
    tokens: R,
    navigator: N,
    notifier: A,
    clock: C,
}

impl<R, N, A, C> SessionGate<R, N, A, C>
where
    R: TokenReader,
    N: Navigator,
    A: Notifier,
    C: Clock,
{
    #[must_use]
    pub fn new(config: RedirectConfig, tokens: R, navigator: N, notifier: A, clock: C) -> Self {
        Self { config, tokens, navigator, notifier, clock }
    }

    #[must_use]
    pub fn config(&self) -> &RedirectConfig {
        &self.config
    }

    /// Evaluate the cached token now, keeping absent and malformed apart.
    #[must_use]
    pub fn inspect(&self) -> TokenStatus {
        let raw = self.tokens.read_token();
        let status = token::evaluate(raw.as_deref(), self.clock.now_millis());
        match &status {
            TokenStatus::Absent => log::warn!("[auth] no ID token under {:?}", self.config.token_key),
            TokenStatus::Malformed(e) => log::error!("[auth] invalid ID token: {e}"),
            TokenStatus::Expired { expires_at_ms } | TokenStatus::Valid { expires_at_ms } => {
                log::info!("[auth] token valid: {} | expires at {expires_at_ms} ms", status.is_authenticated());
            }
        }
        status
    }

    /// `true` iff the cached token decodes and has not expired.
    #[must_use]
    pub fn check_authenticated(&self) -> bool {
        self.inspect().is_authenticated()
    }

    /// Decide where "Go to Site B" leads without navigating.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidAuthorizeUrl`] when the user is
    /// authenticated but the authorization URL cannot be built.
    pub fn plan_transfer(&self) -> Result<Transfer, GateError> {
        if !self.check_authenticated() {
            log::warn!("[redirect] not authenticated, sending to {}", self.config.login_path);
            return Ok(Transfer::Login { path: self.config.login_path.clone() });
        }
        let url = authorize_url(&self.config)?;
        log::info!("[redirect] authorization url: {url}");
        Ok(Transfer::Authorize { url })
    }

    /// Run the transfer: navigate to login or to the identity provider.
    ///
    /// Failures are reported through the notifier, never returned.
    pub fn initiate_site_b_transfer(&self) {
        log::info!("[redirect] transfer to Site B requested");
        let result = self.plan_transfer().and_then(|transfer| self.navigator.navigate(transfer.href()));
        if let Err(e) = result {
            log::error!("[redirect] failed to start transfer: {e}");
            self.notifier.notify(REDIRECT_FAILED_MESSAGE);
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
