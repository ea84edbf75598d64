//! Authorization request URL construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::config::RedirectConfig;
use crate::error::GateError;

/// Characters left alone by `encodeURIComponent`: alphanumerics plus
/// `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value the way `encodeURIComponent` does.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Build the authorization request for Site B's client.
///
/// Parameters are appended in order `client_id`, `response_type=code`,
/// `scope`, `redirect_uri`, `state`, form-encoded. `state` carries the
/// landing page already passed through [`encode_uri_component`], so after
/// query decoding it reads `https%3A%2F%2F...`. Any query already on the
/// endpoint is kept.
///
/// # Errors
///
/// Returns [`GateError::InvalidAuthorizeUrl`] if the endpoint is unusable.
pub fn authorize_url(config: &RedirectConfig) -> Result<Url, GateError> {
    let mut url = config.parsed_authorize_url()?;
    let state = encode_uri_component(&config.landing_page);
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("response_type", "code")
        .append_pair("scope", &config.scope)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("state", &state);
    Ok(url)
}

#[cfg(test)]
#[path = "authorize_test.rs"]
mod tests;
