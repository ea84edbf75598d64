#![cfg(not(feature = "hydrate"))]

use gate::{TokenStatus, Transfer};

use super::*;

#[test]
fn reader_uses_configured_key() {
    let gate = browser_gate(RedirectConfig { token_key: "site_a_token".to_owned(), ..RedirectConfig::default() });
    assert_eq!(gate.config().token_key, "site_a_token");
    assert_eq!(LocalStorageTokenReader::new("id_token").key(), "id_token");
}

#[test]
fn reader_sees_no_token_outside_browser() {
    assert_eq!(LocalStorageTokenReader::new("id_token").read_token(), None);
}

#[test]
fn storage_read_error_counts_as_absent() {
    assert_eq!(stored_token("id_token", Err::<Option<String>, _>("SecurityError")), None);
    assert_eq!(stored_token::<()>("id_token", Ok(None)), None);
    assert_eq!(stored_token::<()>("id_token", Ok(Some("a.b.c".to_owned()))).as_deref(), Some("a.b.c"));
}

#[test]
fn navigator_refuses_outside_browser() {
    let err = LocationNavigator.navigate("/login").unwrap_err();
    assert_eq!(
        err,
        GateError::Navigation { href: "/login".to_owned(), reason: "navigation requires a browser".to_owned() }
    );
}

#[test]
fn notifier_is_callable_outside_browser() {
    AlertNotifier.notify(gate::REDIRECT_FAILED_MESSAGE);
}

#[test]
fn clock_falls_back_to_system_time() {
    assert!(BrowserClock.now_millis() > 1_577_836_800_000);
}

#[test]
fn server_side_gate_plans_login() {
    let gate = browser_gate(RedirectConfig::default());
    assert_eq!(gate.inspect(), TokenStatus::Absent);
    assert_eq!(gate.plan_transfer().unwrap(), Transfer::Login { path: "/login".to_owned() });
    gate.initiate_site_b_transfer();
}
