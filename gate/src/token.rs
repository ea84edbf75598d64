//! Cached ID token decoding and expiry evaluation.
//!
//! Only the payload segment of `header.payload.signature` is read. The
//! signature is not verified: the token is a hint that a Site A session
//! exists, not proof of one.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;

/// Standard alphabet, padding optional, stray trailing bits ignored (same
/// tolerance as `atob`).
const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Why a cached token could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token has no second `.`-separated segment.
    #[error("token has no payload segment")]
    MissingPayload,

    /// The payload segment is not valid base64.
    #[error("payload is not valid base64: {0}")]
    Base64(String),

    /// The decoded payload is not a JSON object with a numeric `exp`.
    #[error("payload is not a valid claims object: {0}")]
    Claims(String),
}

/// Claims the gate reads from the payload. Everything else is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry in Unix epoch seconds.
    pub exp: f64,
}

impl TokenClaims {
    /// Expiry in Unix epoch milliseconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn expires_at_ms(&self) -> i64 {
        // `as` saturates, so absurd values clamp instead of wrapping.
        (self.exp * 1000.0) as i64
    }
}

/// Outcome of evaluating the cached token at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// Nothing stored under the token key (or an empty string).
    Absent,
    /// Something is stored but it could not be decoded.
    Malformed(TokenError),
    /// Decoded, but `now >= exp`.
    Expired { expires_at_ms: i64 },
    /// Decoded and `now < exp`.
    Valid { expires_at_ms: i64 },
}

impl TokenStatus {
    /// `true` only for [`TokenStatus::Valid`].
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Expiry when the token decoded, whether or not it has passed.
    #[must_use]
    pub fn expires_at_ms(&self) -> Option<i64> {
        match self {
            Self::Valid { expires_at_ms } | Self::Expired { expires_at_ms } => Some(*expires_at_ms),
            Self::Absent | Self::Malformed(_) => None,
        }
    }

    /// Short lowercase label, used in logs and CLI output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Malformed(_) => "malformed",
            Self::Expired { .. } => "expired",
            Self::Valid { .. } => "valid",
        }
    }
}

/// Decode the payload segment of a JWT without verifying it.
///
/// URL-safe characters are mapped back to the standard alphabet before
/// decoding, and ASCII whitespace is dropped.
///
/// # Errors
///
/// Returns a [`TokenError`] describing the first step that failed.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let segment = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    let standard: String = segment
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let bytes = FORGIVING_STANDARD
        .decode(standard.as_bytes())
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Evaluate a raw stored value against `now_ms`.
#[must_use]
pub fn evaluate(raw: Option<&str>, now_ms: i64) -> TokenStatus {
    let Some(token) = raw.filter(|t| !t.is_empty()) else {
        return TokenStatus::Absent;
    };
    match decode_claims(token) {
        Ok(claims) => {
            let expires_at_ms = claims.expires_at_ms();
            if now_ms < expires_at_ms {
                TokenStatus::Valid { expires_at_ms }
            } else {
                TokenStatus::Expired { expires_at_ms }
            }
        }
        Err(e) => TokenStatus::Malformed(e),
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
