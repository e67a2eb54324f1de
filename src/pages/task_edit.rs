//! Task edit form: load, modify, update.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{Task, TaskPayload, TaskPriority, TaskStatus};
use crate::state::session::SessionState;

async fn load_task(id: Option<i64>) -> Option<Task> {
    let id = id?;
    match crate::net::api::fetch_task(id).await {
        Ok(task) => Some(task),
        Err(err) => {
            leptos::logging::warn!("task fetch failed: {err}");
            None
        }
    }
}

/// Edit page — reads the task id from the route, loads the task, and hands
/// it to the form once present.
#[component]
pub fn EditTaskPage() -> impl IntoView {
    let params = use_params_map();
    let task = LocalResource::new(move || {
        let id = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());
        load_task(id)
    });

    view! {
        <div class="task-form-page">
            <Suspense fallback=move || view! { <p class="page-note">"Loading task..."</p> }>
                {move || {
                    task.get()
                        .map(|loaded| match loaded {
                            Some(task) => view! { <EditTaskForm task=task/> }.into_any(),
                            None => {
                                view! {
                                    <p class="page-note page-note--error">
                                        "Failed to load task data."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// The edit form itself, seeded from the loaded task.
///
/// Submitting as non-staff refuses locally without issuing the request;
/// this mirrors the hidden controls elsewhere and is not access control.
/// The server re-checks the update regardless.
#[component]
fn EditTaskForm(task: Task) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let id = task.id;
    let title = RwSignal::new(task.title);
    let description = RwSignal::new(task.description);
    let due_date = RwSignal::new(task.due_date);
    let priority = RwSignal::new(task.priority);
    let status = RwSignal::new(task.status);
    let project = RwSignal::new(task.project.to_string());
    let created_by = RwSignal::new(task.created_by.to_string());
    let error = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        error.set(None);

        if !session.get_untracked().is_staff() {
            error.set(Some("You are not authorized to update this task."));
            return;
        }

        let (Ok(project_id), Ok(creator_id)) = (
            project.get_untracked().parse::<i64>(),
            created_by.get_untracked().parse::<i64>(),
        ) else {
            return;
        };

        let payload = TaskPayload {
            title: title.get_untracked(),
            description: description.get_untracked(),
            due_date: due_date.get_untracked(),
            priority: priority.get_untracked(),
            status: status.get_untracked(),
            project: project_id,
            created_by: creator_id,
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_task(id, &payload).await {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(err) => {
                        leptos::logging::warn!("task update failed: {err}");
                        error.set(Some("Failed to update the task. Please try again."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <h2 class="task-form-page__heading">"Edit Task"</h2>

        {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}

        <form
            class="task-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <label class="form__label">
                "Title"
                <input
                    class="form__input"
                    type="text"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>

            <label class="form__label">
                "Description"
                <textarea
                    class="form__input"
                    required=true
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label class="form__label">
                "Due Date"
                <input
                    class="form__input"
                    type="date"
                    required=true
                    prop:value=move || due_date.get()
                    on:input=move |ev| due_date.set(event_target_value(&ev))
                />
            </label>

            <label class="form__label">
                "Priority"
                <select
                    class="form__input"
                    prop:value=move || priority.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = TaskPriority::parse(&event_target_value(&ev)) {
                            priority.set(parsed);
                        }
                    }
                >
                    {TaskPriority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="form__label">
                "Status"
                <select
                    class="form__input"
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = TaskStatus::parse(&event_target_value(&ev)) {
                            status.set(parsed);
                        }
                    }
                >
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="form__label">
                "Project ID"
                <input
                    class="form__input"
                    type="number"
                    required=true
                    prop:value=move || project.get()
                    on:input=move |ev| project.set(event_target_value(&ev))
                />
            </label>

            <label class="form__label">
                "Created By (User ID)"
                <input
                    class="form__input"
                    type="number"
                    required=true
                    prop:value=move || created_by.get()
                    on:input=move |ev| created_by.set(event_target_value(&ev))
                />
            </label>

            <button class="btn btn--primary btn--block" type="submit">
                "Update Task"
            </button>
        </form>
    }
}
