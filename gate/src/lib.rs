//! Session gate for the Site A → Site B hand-off.
//!
//! This crate owns the decision shared by the browser bundle (`client`) and
//! the developer CLI: read the locally cached ID token, check its expiry, and
//! either send the user to Site A's login page or build the authorization
//! request for Site B's client at the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser effects (storage, navigation, alerts, the clock) sit behind the
//! traits in [`capability`] so the decision itself stays pure. The token is
//! never signature-checked here; Site B's code exchange is the real check.

pub mod authorize;
pub mod capability;
pub mod config;
pub mod error;
pub mod session;
pub mod token;

pub use authorize::{authorize_url, encode_uri_component};
pub use capability::{Clock, FixedClock, Navigator, Notifier, StaticTokenReader, SystemClock, TokenReader};
pub use config::RedirectConfig;
pub use error::GateError;
pub use session::{REDIRECT_FAILED_MESSAGE, SessionGate, Transfer};
pub use token::{TokenClaims, TokenError, TokenStatus};
