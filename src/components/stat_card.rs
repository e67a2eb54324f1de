//! Figure tile for the dashboard stats grid.

use leptos::prelude::*;

/// A labeled figure on the dashboard.
#[component]
pub fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3 class="stat-card__label">{label}</h3>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}
