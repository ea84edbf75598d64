use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde_json::json;

use super::*;

const NOW_MS: i64 = 1_700_000_000_000;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

fn token_expiring_in(secs: i64) -> String {
    token_with_payload(&json!({ "sub": "user-1", "exp": NOW_MS / 1000 + secs }))
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn future_expiry_is_valid() {
    let token = token_expiring_in(3600);
    let status = evaluate(Some(&token), NOW_MS);
    assert_eq!(status, TokenStatus::Valid { expires_at_ms: NOW_MS + 3_600_000 });
    assert!(status.is_authenticated());
}

#[test]
fn past_expiry_is_expired() {
    let token = token_expiring_in(-10);
    let status = evaluate(Some(&token), NOW_MS);
    assert_eq!(status, TokenStatus::Expired { expires_at_ms: NOW_MS - 10_000 });
    assert!(!status.is_authenticated());
}

#[test]
fn expiry_equal_to_now_is_expired() {
    let token = token_expiring_in(0);
    assert_eq!(evaluate(Some(&token), NOW_MS).label(), "expired");
}

#[test]
fn missing_token_is_absent() {
    assert_eq!(evaluate(None, NOW_MS), TokenStatus::Absent);
}

#[test]
fn empty_token_is_absent() {
    assert_eq!(evaluate(Some(""), NOW_MS), TokenStatus::Absent);
}

#[test]
fn single_segment_token_is_malformed() {
    let status = evaluate(Some("not-a-jwt"), NOW_MS);
    assert_eq!(status, TokenStatus::Malformed(TokenError::MissingPayload));
    assert_eq!(status.expires_at_ms(), None);
}

#[test]
fn non_json_payload_is_malformed() {
    let body = URL_SAFE_NO_PAD.encode("hello world");
    let status = evaluate(Some(&format!("h.{body}.s")), NOW_MS);
    assert!(matches!(status, TokenStatus::Malformed(TokenError::Claims(_))), "{status:?}");
}

#[test]
fn truncated_payload_is_malformed() {
    let full = token_expiring_in(3600);
    let mut parts = full.split('.');
    let header = parts.next().unwrap();
    let body = parts.next().unwrap();
    let truncated = format!("{header}.{}", &body[..body.len() / 2]);
    assert!(!evaluate(Some(&truncated), NOW_MS).is_authenticated());
}

#[test]
fn invalid_base64_is_malformed() {
    let status = evaluate(Some("h.%%%.s"), NOW_MS);
    assert!(matches!(status, TokenStatus::Malformed(TokenError::Base64(_))), "{status:?}");
}

#[test]
fn payload_without_exp_is_malformed() {
    let token = token_with_payload(&json!({ "sub": "user-1" }));
    let status = evaluate(Some(&token), NOW_MS);
    assert!(matches!(status, TokenStatus::Malformed(TokenError::Claims(_))), "{status:?}");
}

#[test]
fn non_object_payload_is_malformed() {
    let token = token_with_payload(&json!([1, 2, 3]));
    assert_eq!(evaluate(Some(&token), NOW_MS).label(), "malformed");
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_accepts_padded_standard_alphabet() {
    let body = STANDARD.encode(json!({ "exp": 12 }).to_string());
    assert!(body.ends_with('='), "fixture should carry padding: {body}");
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(claims.expires_at_ms(), 12_000);
}

#[test]
fn decode_maps_url_safe_characters() {
    // "?>?" encodes to "Pz4/" in the standard alphabet and "Pz4_" URL-safe.
    let payload = json!({ "exp": 99, "note": "?>?>?>" });
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    assert!(body.contains('_') || body.contains('-'), "fixture should exercise url-safe chars: {body}");
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert!((claims.exp - 99.0).abs() < f64::EPSILON);
}

#[test]
fn decode_ignores_whitespace_in_segment() {
    let body = URL_SAFE_NO_PAD.encode(json!({ "exp": 5 }).to_string());
    let (a, b) = body.split_at(4);
    let claims = decode_claims(&format!("h.{a} \n{b}.s")).unwrap();
    assert_eq!(claims.expires_at_ms(), 5_000);
}

#[test]
fn decode_keeps_fractional_expiry() {
    let token = token_with_payload(&json!({ "exp": 1.5 }));
    assert_eq!(decode_claims(&token).unwrap().expires_at_ms(), 1_500);
}

#[test]
fn decode_does_not_need_signature_segment() {
    let token = token_expiring_in(60);
    let unsigned = token.rsplit_once('.').unwrap().0;
    assert!(decode_claims(unsigned).is_ok());
}
