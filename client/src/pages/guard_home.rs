//! Guard landing page: recent gate activity and plate lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The counters and history come from `GET /api/dashboard_vigilante`; the
//! lookup box hits `GET /api/buscar_placa/{placa}`. Both are guarded calls,
//! so a 401 from either sends the user back to login.

#[cfg(test)]
#[path = "guard_home_test.rs"]
mod guard_home_test;

use leptos::prelude::*;
use session::api::{AccessFilters, GuardDashboard, PlateLookup};
use session::{ApiError, Resource};

use crate::components::stat_card::StatCard;
use crate::pages::resource::guarded_loader;
use crate::state::resource::LoadState;

/// Text for the lookup result line.
pub fn lookup_message(result: &Result<PlateLookup, ApiError>) -> String {
    match result {
        Ok(v) => format!("Placa: {} · Tipo: {} · Color: {} · Propietario: {}", v.placa, v.tipo, v.color, v.propietario),
        Err(ApiError::Status { status: 404, .. }) => "Vehículo no encontrado".to_owned(),
        Err(e) => e.to_string(),
    }
}

/// CSS modifier for the access outcome column (`Verde` / `Rojo`).
pub fn outcome_class(estado: &str) -> &'static str {
    if estado.eq_ignore_ascii_case("verde") { "outcome outcome--granted" } else { "outcome outcome--denied" }
}

#[component]
pub fn GuardHome() -> impl IntoView {
    let dashboard = RwSignal::new(LoadState::<GuardDashboard>::Loading);
    guarded_loader(Resource::GuardDashboard, dashboard)(AccessFilters::default());

    let placa = RwSignal::new(String::new());
    let lookup = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let on_lookup = {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::util::guard::redirect_after_error;
        use crate::util::storage::AppSessionStore;

        let store = expect_context::<AppSessionStore>();
        let navigate = use_navigate();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let value = placa.get_untracked();
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::lookup_plate(&store, &value).await;
                if let Err(err) = &result {
                    if let Some(to) = redirect_after_error(err) {
                        navigate(to, NavigateOptions::default());
                        return;
                    }
                }
                lookup.set(Some(lookup_message(&result)));
            });
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        lookup.set(None);
    };

    view! {
        <section class="home">
            <h2>"Panel del vigilante"</h2>
            <form class="plate-lookup" on:submit=on_lookup>
                <input
                    type="text"
                    placeholder="Buscar placa..."
                    prop:value=move || placa.get()
                    on:input=move |ev| placa.set(event_target_value(&ev))
                />
                <button type="submit">"Buscar"</button>
            </form>
            {move || lookup.get().map(|msg| view! { <p class="plate-lookup__result">{msg}</p> })}
            {move || match dashboard.get() {
                LoadState::Loading => view! { <p class="resource__status">"Cargando..."</p> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="resource__error">{msg}</p> }.into_any(),
                LoadState::Loaded(d) => view! {
                    <div class="stat-grid">
                        <StatCard label="Alertas activas" value=d.alertas/>
                        <StatCard label="Vehículos registrados" value=d.vehiculos/>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr><th>"Hora"</th><th>"Placa"</th><th>"Resultado"</th></tr>
                        </thead>
                        <tbody>
                            {if d.historial.is_empty() {
                                view! { <tr><td colspan="3">"No hay registros"</td></tr> }.into_any()
                            } else {
                                d.historial
                                    .into_iter()
                                    .map(|(hora, placa, estado)| {
                                        view! {
                                            <tr>
                                                <td>{hora}</td>
                                                <td>{placa}</td>
                                                <td class=outcome_class(&estado)>{estado.clone()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </section>
    }
}
