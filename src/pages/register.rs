//! Registration page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Account creation form with a client-side password confirmation check.
/// Success navigates to the login page; the response body is not used.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        error.set(None);

        if password.get_untracked() != password2.get_untracked() {
            error.set(Some("Passwords do not match"));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::RegisterRequest {
                    username: username.get_untracked(),
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                };
                match crate::net::api::register(&request).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(err) => {
                        leptos::logging::warn!("registration failed: {err}");
                        error.set(Some("Registration failed"));
                    }
                }
            });
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Create a New Account"</h2>

                {move || error.get().map(|msg| view! { <div class="auth-card__error">{msg}</div> })}

                <form
                    class="auth-card__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <input
                        class="form__input"
                        type="text"
                        required=true
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="email"
                        required=true
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="password"
                        required=true
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="password"
                        required=true
                        placeholder="Confirm Password"
                        prop:value=move || password2.get()
                        on:input=move |ev| password2.set(event_target_value(&ev))
                    />

                    <button class="btn btn--primary btn--block" type="submit">
                        "Register"
                    </button>
                </form>

                <p class="auth-card__footnote">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
