//! Single counter tile used on the landing pages.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
