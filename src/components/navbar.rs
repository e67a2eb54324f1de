//! Top navigation bar with session-dependent links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Navigation bar: brand link, page links while authenticated, login and
/// register links otherwise, plus a collapsible menu for narrow screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu_open = RwSignal::new(false);

    let toggle_label = move || if menu_open.get() { "✕" } else { "☰" };
    let close_menu = Callback::new(move |()| menu_open.set(false));

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <a class="navbar__brand" href="/">
                    "Task Management"
                </a>

                <button
                    class="navbar__toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {toggle_label}
                </button>

                <div class="navbar__links">
                    <NavLinks on_select=close_menu/>
                    <span class="navbar__role">
                        {move || if session.get().is_staff() { "Admin" } else { "User" }}
                    </span>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__menu">
                    <NavLinks on_select=close_menu/>
                    <span class="navbar__role">
                        {move || {
                            let state = session.get();
                            let role = if state.is_staff() { "Admin" } else { "User" };
                            state
                                .user()
                                .map(|u| format!("{role}: {}", u.username))
                                .unwrap_or_default()
                        }}
                    </span>
                </div>
            </Show>
        </nav>
    }
}

/// The link set itself, shared by the wide layout and the collapsed menu.
#[component]
fn NavLinks(on_select: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        session::logout(session);
        on_select.run(());
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <a class="navbar__link" href="/login" on:click=move |_| on_select.run(())>
                        "Login"
                    </a>
                    <a class="navbar__link" href="/register" on:click=move |_| on_select.run(())>
                        "Register"
                    </a>
                }
            }
        >
            <a class="navbar__link" href="/" on:click=move |_| on_select.run(())>
                "Dashboard"
            </a>
            <a class="navbar__link" href="/tasks" on:click=move |_| on_select.run(())>
                "Tasks"
            </a>
            <a class="navbar__link" href="/projects" on:click=move |_| on_select.run(())>
                "Projects"
            </a>
            <button class="navbar__link" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </Show>
    }
}
