//! Durable token store backed by `localStorage`.
//!
//! Two keyed entries: the raw token string and the JSON-serialized user
//! profile. The store is a mirror of the in-memory session, not a second
//! source of truth; it is read back once at startup and rewritten on every
//! login/logout. Requires a browser environment; all accessors are inert
//! natively and on the server.
//!
//! Storage being disabled surfaces as a silent no-op, and a stored profile
//! that no longer parses is treated as absent rather than an error.

use crate::net::types::UserProfile;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "taskdeck_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "taskdeck_user";

/// Read the persisted bearer token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the persisted user profile, if any.
///
/// Malformed stored JSON is treated as absent.
pub fn load_user() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(USER_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token and profile together.
pub fn save_session(token: &str, user: &UserProfile) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove both entries.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}
