use super::*;

// =============================================================
// Authorization header
// =============================================================

#[test]
fn bearer_value_formats_header_exactly() {
    assert_eq!(bearer_value("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn bearer_value_keeps_token_verbatim() {
    // The token is opaque; nothing is trimmed or escaped.
    assert_eq!(bearer_value(" spaced "), "Bearer  spaced ");
}

// =============================================================
// Error taxonomy
// =============================================================

#[test]
fn error_messages_name_the_failure_class() {
    assert_eq!(
        ApiError::Network("timed out".to_owned()).to_string(),
        "network error: timed out"
    );
    assert_eq!(
        ApiError::Status(401).to_string(),
        "request failed with status 401"
    );
    assert_eq!(
        ApiError::Body("missing field".to_owned()).to_string(),
        "invalid response body: missing field"
    );
}

#[test]
fn status_errors_compare_by_code() {
    assert_eq!(ApiError::Status(404), ApiError::Status(404));
    assert_ne!(ApiError::Status(404), ApiError::Status(500));
}
