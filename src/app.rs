//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, projects::ProjectListPage,
    register::RegisterPage, task_edit::EditTaskPage, task_new::TaskFormPage, tasks::TaskListPage,
};
use crate::state::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Rebuilds the session from the durable token store (absent or corrupt
/// storage yields an anonymous session), provides it as context, and sets up
/// client-side routing with every CRUD page behind the auth guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::restore_session());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdeck.css"/>
        <Title text="Task Management"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("tasks")
                        view=|| view! { <RequireAuth><TaskListPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("projects")
                        view=|| view! { <RequireAuth><ProjectListPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("task"), StaticSegment("new"))
                        view=|| view! { <RequireAuth><TaskFormPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("task"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><EditTaskPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
