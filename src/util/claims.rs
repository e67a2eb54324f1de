//! Advisory decoding of the access token's identity claim.
//!
//! The login response carries a three-segment dot-delimited token; the middle
//! segment is base64url-encoded JSON holding a `user_id` claim. No signature
//! or expiry verification happens client-side: the decoded id is used for
//! display only, never for authorization decisions. Malformed input of any
//! kind yields `None` instead of an error.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// The identity claim embedded in the access token's payload segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    pub user_id: i64,
}

/// Decode the payload segment of a bearer token.
///
/// Returns `None` unless the token has exactly three segments and the middle
/// one is unpadded base64url JSON containing a `user_id`.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return None;
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
