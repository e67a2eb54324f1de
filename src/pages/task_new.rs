//! Task creation form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{Project, TaskPayload, TaskPriority, TaskStatus};
use crate::state::session::SessionState;

async fn load_projects() -> Vec<Project> {
    match crate::net::api::fetch_projects().await {
        Ok(projects) => projects,
        Err(err) => {
            leptos::logging::warn!("project fetch failed: {err}");
            Vec::new()
        }
    }
}

/// Task creation form. The project select is populated from the API and the
/// created-by field is fixed to the logged-in user's id. A successful create
/// navigates back to the dashboard.
///
/// The submit button is disabled while a request is in flight, but nothing
/// de-duplicates requests: two submits racing before the first response
/// lands will both reach the server.
#[component]
pub fn TaskFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let priority = RwSignal::new(TaskPriority::default());
    let status = RwSignal::new(TaskStatus::default());
    let project = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let projects = LocalResource::new(|| load_projects());
    let created_by = move || session.get().user().map(|u| u.id).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        error.set(None);

        // The select is required; with nothing chosen there is no submit.
        let Ok(project_id) = project.get_untracked().parse::<i64>() else {
            return;
        };

        let payload = TaskPayload {
            title: title.get_untracked(),
            description: description.get_untracked(),
            due_date: due_date.get_untracked(),
            priority: priority.get_untracked(),
            status: status.get_untracked(),
            project: project_id,
            created_by: session
                .get_untracked()
                .user()
                .map(|u| u.id)
                .unwrap_or_default(),
        };

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_task(&payload).await {
                    Ok(task) => {
                        leptos::logging::log!("task created: {}", task.id);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("task create failed: {err}");
                        error.set(Some("Failed to create task. Please try again."));
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <div class="task-form-page">
            <h2 class="task-form-page__heading">"Create Task"</h2>

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
                    "Select Project"
                    <select
                        class="form__input"
                        required=true
                        prop:value=move || project.get()
                        on:change=move |ev| project.set(event_target_value(&ev))
                    >
                        <option value="">"Select a project"</option>
                        {move || {
                            projects
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|p| {
                                            view! {
                                                <option value=p.id.to_string()>
                                                    {format!("{} (ID: {})", p.name, p.id)}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>

                <label class="form__label">
                    "Created By (User ID)"
                    <input
                        class="form__input form__input--readonly"
                        type="number"
                        disabled=true
                        prop:value=move || created_by().to_string()
                    />
                </label>

                <button
                    class="btn btn--primary btn--block"
                    type="submit"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Task" }}
                </button>
            </form>
        </div>
    }
}
