//! UX-only auth guard for protected routes.
//!
//! The guard redirects unauthenticated viewers to the login screen but does
//! not enforce security; the API validates the token on every request
//! regardless of what is rendered here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Renders wrapped content when a session is present, else redirects to
/// `/login`. Re-evaluated on every session change; the decision is never
/// cached.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! { {children()} }
}
