//! Browser implementations of the gate capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! These wrap `localStorage`, `window.location`, `window.alert` and
//! `Date.now()` so the gate itself never touches `web-sys`.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `hydrate` build (SSR, native tests) there is no storage, so
//! every user looks logged out. Navigation is refused there and alerts only
//! go to the log. The clock uses system time instead.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use gate::{Clock, GateError, Navigator, Notifier, RedirectConfig, SessionGate, TokenReader};

/// Gate wired to the real browser.
pub type BrowserGate = SessionGate<LocalStorageTokenReader, LocationNavigator, AlertNotifier, BrowserClock>;

/// Build a gate over the browser for `config`.
pub fn browser_gate(config: RedirectConfig) -> BrowserGate {
    let tokens = LocalStorageTokenReader::new(config.token_key.clone());
    SessionGate::new(config, tokens, LocationNavigator, AlertNotifier, BrowserClock)
}

/// Reads the cached ID token from `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageTokenReader {
    key: String,
}

impl LocalStorageTokenReader {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TokenReader for LocalStorageTokenReader {
    fn read_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let storage = match window.local_storage() {
                Ok(Some(storage)) => storage,
                Ok(None) => return None,
                Err(e) => {
                    log::warn!("[auth] localStorage unavailable: {e:?}");
                    return None;
                }
            };
            stored_token(&self.key, storage.get_item(&self.key))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// A failed storage read counts as no token.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn stored_token<E: std::fmt::Debug>(key: &str, read: Result<Option<String>, E>) -> Option<String> {
    match read {
        Ok(token) => token,
        Err(e) => {
            log::warn!("[auth] failed to read {key:?} from localStorage: {e:?}");
            None
        }
    }
}

/// Full-page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, href: &str) -> Result<(), GateError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or_else(|| navigation_error(href, "no window"))?;
            window
                .location()
                .set_href(href)
                .map_err(|e| navigation_error(href, &format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(navigation_error(href, "navigation requires a browser"))
        }
    }
}

fn navigation_error(href: &str, reason: &str) -> GateError {
    GateError::Navigation { href: href.to_owned(), reason: reason.to_owned() }
}

/// Blocking `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
                return;
            }
        }
        log::error!("[notify] {message}");
    }
}

/// `Date.now()` in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            gate::SystemClock.now_millis()
        }
    }
}
