use super::*;

fn query_of(url: &Url) -> Vec<(String, String)> {
    url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}

// =============================================================
// encode_uri_component
// =============================================================

#[test]
fn encodes_landing_page_like_browser() {
    assert_eq!(encode_uri_component("https://siteb.com/landing"), "https%3A%2F%2Fsiteb.com%2Flanding");
}

#[test]
fn leaves_unreserved_marks_untouched() {
    assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
}

#[test]
fn encodes_space_and_unicode_as_percent_bytes() {
    assert_eq!(encode_uri_component("a b?x=é"), "a%20b%3Fx%3D%C3%A9");
}

// =============================================================
// authorize_url
// =============================================================

#[test]
fn default_config_builds_expected_url() {
    let url = authorize_url(&RedirectConfig::default()).unwrap();
    assert_eq!(
        url.as_str(),
        "https://idp.pingidentity.com/authorize?client_id=site-b-client-id&response_type=code\
         &scope=openid+profile&redirect_uri=https%3A%2F%2Fsiteb.com%2Fcallback\
         &state=https%253A%252F%252Fsiteb.com%252Flanding"
    );
}

#[test]
fn carries_exactly_five_parameters_in_order() {
    let url = authorize_url(&RedirectConfig::default()).unwrap();
    let keys: Vec<String> = query_of(&url).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["client_id", "response_type", "scope", "redirect_uri", "state"]);
}

#[test]
fn decoded_values_match_config() {
    let url = authorize_url(&RedirectConfig::default()).unwrap();
    assert_eq!(
        query_of(&url),
        vec![
            ("client_id".to_owned(), "site-b-client-id".to_owned()),
            ("response_type".to_owned(), "code".to_owned()),
            ("scope".to_owned(), "openid profile".to_owned()),
            ("redirect_uri".to_owned(), "https://siteb.com/callback".to_owned()),
            ("state".to_owned(), "https%3A%2F%2Fsiteb.com%2Flanding".to_owned()),
        ]
    );
}

#[test]
fn existing_endpoint_query_is_preserved() {
    let cfg = RedirectConfig {
        authorize_url: "https://idp.example.test/authorize?acr_values=mfa".to_owned(),
        ..RedirectConfig::default()
    };
    let url = authorize_url(&cfg).unwrap();
    assert_eq!(url.as_str().matches('?').count(), 1);
    assert!(url.as_str().starts_with("https://idp.example.test/authorize?acr_values=mfa&client_id="));
}

#[test]
fn unusable_endpoint_is_an_error() {
    let cfg = RedirectConfig { authorize_url: "not a url".to_owned(), ..RedirectConfig::default() };
    assert!(matches!(authorize_url(&cfg), Err(GateError::InvalidAuthorizeUrl { .. })));
}
