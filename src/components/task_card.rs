//! Card component for task list items.

use leptos::prelude::*;

use crate::net::types::{Task, TaskPriority, TaskStatus};

fn priority_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => "task-card__priority task-card__priority--high",
        TaskPriority::Medium => "task-card__priority task-card__priority--medium",
        TaskPriority::Low => "task-card__priority task-card__priority--low",
    }
}

fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "task-card__status task-card__status--completed",
        TaskStatus::InProgress => "task-card__status task-card__status--in-progress",
        TaskStatus::Pending => "task-card__status task-card__status--pending",
    }
}

/// A task in the list grid. Edit and delete affordances are rendered for
/// staff only; hiding them is cosmetic, the server still checks.
#[component]
pub fn TaskCard(task: Task, staff: bool, on_delete: Callback<i64>) -> impl IntoView {
    let Task {
        id,
        title,
        description,
        due_date,
        priority,
        status,
        ..
    } = task;
    let edit_href = format!("/task/edit/{id}");

    view! {
        <div class="task-card">
            <div class="task-card__header">
                <div>
                    <h3 class="task-card__title">{title}</h3>
                    <p class="task-card__description">{description}</p>
                </div>
                <span class=status_class(status)>{status.as_str()}</span>
            </div>

            <div class="task-card__footer">
                <div>
                    <p>
                        "Priority: "
                        <span class=priority_class(priority)>{priority.as_str()}</span>
                    </p>
                    <p class="task-card__due">{format!("Due: {due_date}")}</p>
                </div>

                <Show when=move || staff>
                    <div class="task-card__actions">
                        <a class="btn btn--edit" href=edit_href.clone()>
                            "Edit"
                        </a>
                        <button class="btn btn--delete" on:click=move |_| on_delete.run(id)>
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
