//! Project list page with staff-only add and delete.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::types::Project;
use crate::state::session::SessionState;

/// Project list page. Staff get an inline add form; everyone else gets a
/// notice. A successful create appends locally and a successful delete
/// removes the row locally, without a refetch.
#[component]
pub fn ProjectListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let new_name = RwSignal::new(String::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_projects().await {
                    Ok(list) => projects.set(list),
                    Err(err) => leptos::logging::warn!("project list fetch failed: {err}"),
                }
                loading.set(false);
            });
        }
    });

    let on_add = Callback::new(move |()| {
        let name = new_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_project(&name).await {
                    Ok(project) => {
                        projects.update(|list| list.push(project));
                        new_name.set(String::new());
                    }
                    Err(err) => leptos::logging::warn!("project create failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        if !session.get_untracked().is_staff() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_project(id).await {
                    Ok(()) => projects.update(|list| list.retain(|p| p.id != id)),
                    Err(err) => leptos::logging::warn!("project delete failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="projects-page">
            <h2 class="projects-page__heading">"Projects"</h2>

            <Show
                when=move || session.get().is_staff()
                fallback=|| {
                    view! { <p class="projects-page__notice">"Only admin can add projects."</p> }
                }
            >
                <div class="projects-page__add">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Enter project name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_add.run(());
                            }
                        }
                    />
                    <button class="btn btn--primary" on:click=move |_| on_add.run(())>
                        "Add Project"
                    </button>
                </div>
            </Show>

            {move || {
                if loading.get() {
                    view! { <p class="page-note">"Loading projects..."</p> }.into_any()
                } else if projects.get().is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"No projects found. Create your first project!"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    let staff = session.get().is_staff();
                    view! {
                        <div class="projects-page__grid">
                            {projects
                                .get()
                                .into_iter()
                                .map(|project| {
                                    view! {
                                        <ProjectCard project=project staff=staff on_delete=on_delete/>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
