//! Administrator landing page: global counters.

use leptos::prelude::*;
use session::Resource;
use session::api::{AccessFilters, AdminSummary};

use crate::components::stat_card::StatCard;
use crate::pages::resource::guarded_loader;
use crate::state::resource::LoadState;

#[component]
pub fn AdminHome() -> impl IntoView {
    let summary = RwSignal::new(LoadState::<AdminSummary>::Loading);
    guarded_loader(Resource::AdminSummary, summary)(AccessFilters::default());

    view! {
        <section class="home">
            <h2>"Panel de administración"</h2>
            {move || match summary.get() {
                LoadState::Loading => view! { <p class="resource__status">"Cargando..."</p> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="resource__error">{msg}</p> }.into_any(),
                LoadState::Loaded(s) => view! {
                    <div class="stat-grid">
                        <StatCard label="Total Vehículos" value=s.total_vehiculos/>
                        <StatCard label="Total Accesos" value=s.total_accesos/>
                        <StatCard label="Total Alertas" value=s.total_alertas/>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
