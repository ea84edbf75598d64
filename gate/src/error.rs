//! Errors raised while configuring or executing a transfer.
//!
//! Token decoding failures live in [`crate::token::TokenError`]; they never
//! leave the gate, they only turn into "not authenticated".

/// Errors produced by configuration loading, URL construction and navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// A configuration value was present but unusable.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The identity provider's authorize endpoint is not a usable URL.
    #[error("invalid authorize url {url:?}: {reason}")]
    InvalidAuthorizeUrl { url: String, reason: String },

    /// The navigator refused or failed to change location.
    #[error("navigation to {href} failed: {reason}")]
    Navigation { href: String, reason: String },
}
