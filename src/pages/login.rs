//! Login page: credential form, token exchange, session creation.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Login form. A successful login stores the returned token together with a
/// profile assembled from the decoded `user_id` claim, the submitted
/// username, and the response's staff flag, then navigates to the dashboard.
///
/// Every failure collapses to one static message; wrong password and
/// unreachable server look the same to the user, with detail going to the
/// console only.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let credentials = crate::net::types::Credentials {
                    username: username.get_untracked(),
                    password: password.get_untracked(),
                };
                match crate::net::api::login(&credentials).await {
                    Ok(resp) => {
                        let user =
                            crate::state::session::profile_from_login(credentials.username, &resp);
                        crate::state::session::login(session, resp.access, user);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("login failed: {err}");
                        error.set(Some("Login failed. Please check your credentials."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Sign in to your account"</h2>

                {move || error.get().map(|msg| view! { <div class="auth-card__error">{msg}</div> })}

                <form
                    class="auth-card__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="form__label">
                        "Username"
                        <input
                            class="form__input"
                            type="text"
                            required=true
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            required=true
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="btn btn--primary btn--block" type="submit">
                        "Sign in"
                    </button>
                </form>

                <p class="auth-card__footnote">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
