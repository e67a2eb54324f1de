//! Task list page with staff-gated edit and delete actions.

use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::net::types::Task;
use crate::state::session::SessionState;

async fn load_tasks() -> Vec<Task> {
    match crate::net::api::fetch_tasks().await {
        Ok(tasks) => tasks,
        Err(err) => {
            leptos::logging::warn!("task list fetch failed: {err}");
            Vec::new()
        }
    }
}

/// Task list page — card grid with an add-task link; edit/delete appear for
/// staff only, and a delete from a non-staff session is a no-op (the request
/// is never issued).
#[component]
pub fn TaskListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let tasks = LocalResource::new(|| load_tasks());

    let on_delete = Callback::new(move |id: i64| {
        if !session.get_untracked().is_staff() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let tasks = tasks.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_task(id).await {
                    Ok(()) => tasks.refetch(),
                    Err(err) => leptos::logging::warn!("task delete failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="tasks-page">
            <header class="tasks-page__header">
                <h2>"Tasks"</h2>
                <a class="btn btn--primary" href="/task/new">
                    "Add New Task"
                </a>
            </header>

            <Suspense fallback=move || view! { <p class="page-note">"Loading tasks..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>"No tasks found. Create your first task!"</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                let staff = session.get().is_staff();
                                view! {
                                    <div class="tasks-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|task| {
                                                view! {
                                                    <TaskCard task=task staff=staff on_delete=on_delete/>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
