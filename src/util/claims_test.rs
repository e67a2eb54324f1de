use base64::Engine as _;

use super::*;

// =============================================================
// Well-formed tokens
// =============================================================

#[test]
fn decodes_user_id_from_payload_segment() {
    // Payload is base64url for {"user_id":42}.
    let claims = decode_claims("h.eyJ1c2VyX2lkIjo0Mn0.s").expect("claims");
    assert_eq!(claims.user_id, 42);
}

#[test]
fn ignores_extra_claims_in_payload() {
    // {"user_id":7,"exp":1700000000}
    let payload = URL_SAFE_NO_PAD.encode(r#"{"user_id":7,"exp":1700000000}"#);
    let token = format!("head.{payload}.sig");
    assert_eq!(decode_claims(&token).map(|c| c.user_id), Some(7));
}

// =============================================================
// Malformed tokens degrade to None
// =============================================================

#[test]
fn rejects_wrong_segment_count() {
    assert_eq!(decode_claims(""), None);
    assert_eq!(decode_claims("only-one-segment"), None);
    assert_eq!(decode_claims("a.b"), None);
    assert_eq!(decode_claims("a.b.c.d"), None);
}

#[test]
fn rejects_invalid_base64_payload() {
    assert_eq!(decode_claims("a.!!!.c"), None);
}

#[test]
fn rejects_payload_that_is_not_json() {
    let payload = URL_SAFE_NO_PAD.encode("not json");
    assert_eq!(decode_claims(&format!("a.{payload}.c")), None);
}

#[test]
fn rejects_json_payload_without_user_id() {
    let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"alice"}"#);
    assert_eq!(decode_claims(&format!("a.{payload}.c")), None);
}
