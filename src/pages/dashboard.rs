//! Dashboard page: task/project figures and a welcome panel.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api::ApiError;
use crate::net::types::{Project, Task};
use crate::state::session::SessionState;
use crate::state::stats::TaskStats;

async fn fetch_lists() -> Result<(Vec<Task>, Vec<Project>), ApiError> {
    let tasks = crate::net::api::fetch_tasks().await?;
    let projects = crate::net::api::fetch_projects().await?;
    Ok((tasks, projects))
}

/// Compute the dashboard figures, degrading to zeros when either fetch
/// fails. Detail goes to the console only, matching the rest of the app.
async fn load_stats() -> TaskStats {
    match fetch_lists().await {
        Ok((tasks, projects)) => TaskStats::compute(&tasks, &projects),
        Err(err) => {
            leptos::logging::warn!("stats fetch failed: {err}");
            TaskStats::default()
        }
    }
}

/// Dashboard page — stat cards plus a role-dependent welcome panel.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let stats = LocalResource::new(|| load_stats());

    view! {
        <div class="dashboard-page">
            <h2 class="dashboard-page__heading">"Dashboard"</h2>

            <div class="dashboard-page__grid">
                <Suspense fallback=move || view! { <p class="page-note">"Loading stats..."</p> }>
                    {move || {
                        stats
                            .get()
                            .map(|s| {
                                view! {
                                    <StatCard label="Total Tasks" value=s.total/>
                                    <StatCard label="Completed Tasks" value=s.completed/>
                                    <StatCard label="In Progress Tasks" value=s.in_progress/>
                                    <StatCard label="Projects" value=s.projects/>
                                }
                            })
                    }}
                </Suspense>
            </div>

            {move || {
                session
                    .get()
                    .user()
                    .cloned()
                    .map(|user| {
                        let role_note = if user.is_staff {
                            "You are logged in as an administrator. You have full access \
                             to create, read, update, and delete all tasks and projects."
                        } else {
                            "You are logged in as a standard user. You can view all tasks \
                             and projects, and create new ones."
                        };
                        view! {
                            <div class="dashboard-page__welcome">
                                <h3>{format!("Welcome, {}!", user.username)}</h3>
                                <p>{role_note}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
