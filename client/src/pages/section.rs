//! Guarded entry point for every `/admin/...` and `/vigilante/...` route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router sends both sections here. The guard runs inside the reactive
//! closure keyed on the pathname, so it re-reads the session on every
//! navigation and decides before any protected content is constructed.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use session::routes::{AdminView, VigilanteView};
use session::{AppRoute, Resource};

use crate::components::layout::RoleLayout;
use crate::pages::admin_home::AdminHome;
use crate::pages::guard_home::GuardHome;
use crate::pages::not_found::NotFoundPage;
use crate::pages::resource::ResourcePage;
use crate::util::guard::{Navigation, resolve};
use crate::util::storage::AppSessionStore;

/// What a protected route renders inside the role layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewContent {
    AdminHome,
    GuardHome,
    Table { title: &'static str, resource: Resource, filterable: bool },
    Missing,
}

/// Map a route to its content.
pub fn view_content(route: AppRoute) -> ViewContent {
    let table = |title, resource| ViewContent::Table { title, resource, filterable: false };
    match route {
        AppRoute::Admin(AdminView::Inicio) => ViewContent::AdminHome,
        AppRoute::Vigilante(VigilanteView::Inicio) => ViewContent::GuardHome,
        AppRoute::Admin(AdminView::Historial) | AppRoute::Vigilante(VigilanteView::Historial) => {
            ViewContent::Table { title: "Historial de accesos", resource: Resource::Accesos, filterable: true }
        }
        AppRoute::Admin(AdminView::Personas) | AppRoute::Vigilante(VigilanteView::Personas) => {
            table("Personas", Resource::Personas)
        }
        AppRoute::Admin(AdminView::Vehiculos) | AppRoute::Vigilante(VigilanteView::Vehiculos) => {
            table("Vehículos", Resource::Vehiculos)
        }
        AppRoute::Admin(AdminView::Calendario) | AppRoute::Vigilante(VigilanteView::Calendario) => {
            table("Calendario de eventos", Resource::Eventos)
        }
        AppRoute::Admin(AdminView::Reportes) => table("Reporte de accesos", Resource::AccesosDetalle),
        AppRoute::Admin(AdminView::Auditoria) => table("Auditoría", Resource::Auditoria),
        AppRoute::Admin(AdminView::Alertas) => table("Alertas", Resource::Alertas),
        AppRoute::Vigilante(VigilanteView::Patio) => table("Vehículos en patio", Resource::VehiculosEnPatio),
        AppRoute::Login | AppRoute::NotFound => ViewContent::Missing,
    }
}

fn render_content(content: ViewContent) -> AnyView {
    match content {
        ViewContent::AdminHome => view! { <AdminHome/> }.into_any(),
        ViewContent::GuardHome => view! { <GuardHome/> }.into_any(),
        ViewContent::Table { title, resource, filterable } => {
            view! { <ResourcePage title=title resource=resource filterable=filterable/> }.into_any()
        }
        ViewContent::Missing => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
pub fn SectionPage() -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let location = use_location();

    move || match resolve(&store, &location.pathname.get()) {
        Navigation::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
        Navigation::Render { route, session: Some(current) } => {
            let content = view_content(route);
            view! { <RoleLayout current=current>{render_content(content)}</RoleLayout> }.into_any()
        }
        Navigation::Render { .. } => view! { <NotFoundPage/> }.into_any(),
    }
}
