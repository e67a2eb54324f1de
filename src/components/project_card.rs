//! Card component for project list items.

use leptos::prelude::*;

use crate::net::types::Project;

/// A project in the list grid with a staff-only delete action.
#[component]
pub fn ProjectCard(project: Project, staff: bool, on_delete: Callback<i64>) -> impl IntoView {
    let Project { id, name } = project;

    view! {
        <div class="project-card">
            <h3 class="project-card__name">{name}</h3>

            <Show when=move || staff>
                <div class="project-card__actions">
                    <button class="btn btn--delete" on:click=move |_| on_delete.run(id)>
                        "Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
