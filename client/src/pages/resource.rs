//! Generic list view over one guarded backend resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `RoleLayout` for every table route. Fetches go through
//! `net::api::fetch_resource`; a 401 sends the user back to login since
//! the store has already been cleared.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use session::Resource;
use session::api::AccessFilters;

use crate::components::data_table::DataTable;
use crate::state::resource::LoadState;

#[component]
pub fn ResourcePage(title: &'static str, resource: Resource, #[prop(optional)] filterable: bool) -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Value>>::Loading);
    let filters = RwSignal::new(AccessFilters::default());
    let load = guarded_loader(resource, state);
    load(AccessFilters::default());

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load(filters.get_untracked());
    };

    let filter_field = move |label: &'static str,
                             kind: &'static str,
                             get: fn(&AccessFilters) -> Option<String>,
                             set: fn(&mut AccessFilters, String)| {
        view! {
            <label class="filters__field">
                {label}
                <input
                    type=kind
                    prop:value=move || filters.with(|f| get(f).unwrap_or_default())
                    on:input=move |ev| filters.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    let filter_form = filterable.then(|| {
        view! {
            <form class="filters" on:submit=on_filter>
                {filter_field("Placa", "text", |f| f.placa.clone(), |f, v| f.placa = Some(v))}
                {filter_field("Tipo", "text", |f| f.tipo.clone(), |f, v| f.tipo = Some(v))}
                {filter_field("Desde", "date", |f| f.desde.clone(), |f, v| f.desde = Some(v))}
                {filter_field("Hasta", "date", |f| f.hasta.clone(), |f, v| f.hasta = Some(v))}
                <button type="submit">"Filtrar"</button>
            </form>
        }
    });

    view! {
        <section class="resource">
            <h2>{title}</h2>
            {filter_form}
            {move || match state.get() {
                LoadState::Loading => view! { <p class="resource__status">"Cargando..."</p> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="resource__error">{msg}</p> }.into_any(),
                LoadState::Loaded(rows) => view! { <DataTable rows=rows/> }.into_any(),
            }}
        </section>
    }
}

/// Build a reusable loader that fetches `resource` into `state`.
///
/// A 401 or a missing session navigates to login instead of showing an error.
pub(crate) fn guarded_loader<T>(resource: Resource, state: RwSignal<LoadState<T>>) -> impl Fn(AccessFilters) + Clone
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    #[cfg(feature = "csr")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::util::guard::redirect_after_error;
        use crate::util::storage::AppSessionStore;

        let store = expect_context::<AppSessionStore>();
        let navigate = use_navigate();
        move |filters: AccessFilters| {
            state.set(LoadState::Loading);
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_resource(&store, resource, &filters.query_pairs()).await;
                if let Err(err) = &result {
                    if let Some(to) = redirect_after_error(err) {
                        navigate(to, NavigateOptions::default());
                        return;
                    }
                }
                state.set(LoadState::from_result(result));
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        move |filters: AccessFilters| {
            let _ = (filters, resource);
            state.set(LoadState::Loading);
        }
    }
}
