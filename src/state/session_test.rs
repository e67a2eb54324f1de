use super::*;

fn profile(id: i64, staff: bool) -> UserProfile {
    UserProfile {
        id,
        username: "alice".to_owned(),
        is_staff: staff,
    }
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn anonymous_has_no_token_and_no_user() {
    let state = SessionState::anonymous();
    assert!(state.token().is_none());
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_reads_back_exact_pair() {
    let state = SessionState::authenticated("tok-1".to_owned(), profile(42, false));
    assert_eq!(state.token(), Some("tok-1"));
    assert_eq!(state.user(), Some(&profile(42, false)));
    assert!(state.is_authenticated());
}

#[test]
fn relogin_overwrites_previous_pair() {
    let first = SessionState::authenticated("tok-1".to_owned(), profile(1, false));
    let second = SessionState::authenticated("tok-2".to_owned(), profile(2, true));
    assert_ne!(first, second);
    assert_eq!(second.token(), Some("tok-2"));
    assert_eq!(second.user().map(|u| u.id), Some(2));
}

#[test]
fn default_is_anonymous() {
    assert_eq!(SessionState::default(), SessionState::anonymous());
}

// =============================================================
// Invariant: token is None iff user is None
// =============================================================

#[test]
fn restore_full_pair_is_authenticated() {
    let state = SessionState::restore(Some("tok".to_owned()), Some(profile(7, true)));
    assert!(state.token().is_some());
    assert!(state.user().is_some());
}

#[test]
fn restore_token_without_user_collapses_to_anonymous() {
    let state = SessionState::restore(Some("tok".to_owned()), None);
    assert!(state.token().is_none());
    assert!(state.user().is_none());
}

#[test]
fn restore_user_without_token_collapses_to_anonymous() {
    let state = SessionState::restore(None, Some(profile(7, false)));
    assert!(state.token().is_none());
    assert!(state.user().is_none());
}

#[test]
fn restore_empty_is_anonymous() {
    let state = SessionState::restore(None, None);
    assert_eq!(state, SessionState::anonymous());
}

// =============================================================
// Profile assembly from the login response
// =============================================================

#[test]
fn profile_combines_claim_username_and_staff_flag() {
    let response = LoginResponse {
        access: "h.eyJ1c2VyX2lkIjo0Mn0.s".to_owned(),
        is_staff: false,
    };
    let user = profile_from_login("alice".to_owned(), &response);
    assert_eq!(user, profile(42, false));
}

#[test]
fn profile_degrades_to_unknown_id_on_malformed_token() {
    let response = LoginResponse {
        access: "not-a-token".to_owned(),
        is_staff: true,
    };
    let user = profile_from_login("alice".to_owned(), &response);
    assert_eq!(user.id, 0);
    assert!(user.is_staff);
}

// =============================================================
// Staff flag
// =============================================================

#[test]
fn anonymous_is_never_staff() {
    assert!(!SessionState::anonymous().is_staff());
}

#[test]
fn staff_flag_follows_profile() {
    let staff = SessionState::authenticated("t".to_owned(), profile(1, true));
    let regular = SessionState::authenticated("t".to_owned(), profile(1, false));
    assert!(staff.is_staff());
    assert!(!regular.is_staff());
}
