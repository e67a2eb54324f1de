//! Session state: the client's belief about who is currently logged in.
//!
//! The session is a bearer token paired with the profile that was built from
//! the login response. Both are held together behind private fields so that
//! `token` and `user` are always either both present or both absent. Every
//! transition is mirrored to the durable token store in `util::storage`.
//!
//! There is no expiry detection and no refresh: a token the backend considers
//! expired stays in the session until a request fails and the user logs out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Set};

use crate::net::types::{LoginResponse, UserProfile};
use crate::util::{claims, storage};

/// The current session: Anonymous (no token) or Authenticated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl SessionState {
    /// An empty session with no token and no user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session holding a token and the matching profile.
    pub fn authenticated(token: String, user: UserProfile) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    /// Reconstruct a session from persisted parts read back at startup.
    ///
    /// A partial pair (one of the two missing or unreadable) collapses to
    /// anonymous so the both-or-neither invariant holds even when storage
    /// was corrupted or half-written.
    pub fn restore(token: Option<String>, user: Option<UserProfile>) -> Self {
        match (token, user) {
            (Some(token), Some(user)) => Self::authenticated(token, user),
            _ => Self::anonymous(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the logged-in user carries the staff flag.
    ///
    /// Staff status only gates UI affordances; the backend re-checks every
    /// mutation regardless of what this returns.
    pub fn is_staff(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_staff)
    }
}

/// Build the profile stored alongside the token from a login response.
///
/// The id comes from the token's advisory identity claim and degrades to
/// zero when the payload does not decode; the staff flag comes from the
/// response body, never from the claim.
pub fn profile_from_login(username: String, response: &LoginResponse) -> UserProfile {
    let id = claims::decode_claims(&response.access).map_or(0, |c| c.user_id);
    UserProfile {
        id,
        username,
        is_staff: response.is_staff,
    }
}

/// Read the persisted session back from the token store.
///
/// Returns an anonymous session when nothing was stored, storage is
/// unavailable, or the stored profile does not parse.
pub fn restore_session() -> SessionState {
    SessionState::restore(storage::load_token(), storage::load_user())
}

/// Replace the session with a fresh token/profile pair and persist it.
///
/// Unconditional overwrite: logging in while already authenticated replaces
/// the pair wholesale, with no merge.
pub fn login(session: RwSignal<SessionState>, token: String, user: UserProfile) {
    storage::save_session(&token, &user);
    session.set(SessionState::authenticated(token, user));
}

/// Clear the in-memory session and the durable mirror together.
pub fn logout(session: RwSignal<SessionState>) {
    storage::clear_session();
    session.set(SessionState::anonymous());
}
