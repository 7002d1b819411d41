use super::*;

#[test]
fn landing_routes_render_dashboards() {
    assert_eq!(view_content(AppRoute::Admin(AdminView::Inicio)), ViewContent::AdminHome);
    assert_eq!(view_content(AppRoute::Vigilante(VigilanteView::Inicio)), ViewContent::GuardHome);
}

#[test]
fn history_tables_are_filterable() {
    for route in [AppRoute::Admin(AdminView::Historial), AppRoute::Vigilante(VigilanteView::Historial)] {
        assert_eq!(
            view_content(route),
            ViewContent::Table { title: "Historial de accesos", resource: Resource::Accesos, filterable: true }
        );
    }
}

#[test]
fn every_protected_route_has_content() {
    let routes = AdminView::ALL
        .into_iter()
        .map(AppRoute::Admin)
        .chain(VigilanteView::ALL.into_iter().map(AppRoute::Vigilante));
    for route in routes {
        assert_ne!(view_content(route), ViewContent::Missing, "{route:?}");
    }
}

#[test]
fn table_resources_are_reachable_by_the_section_role() {
    for view in VigilanteView::ALL {
        if let ViewContent::Table { resource, .. } = view_content(AppRoute::Vigilante(view)) {
            assert!(resource.required_roles().allows(session::Role::Vigilante), "{view:?}");
        }
    }
}

#[test]
fn public_routes_have_no_section_content() {
    assert_eq!(view_content(AppRoute::Login), ViewContent::Missing);
    assert_eq!(view_content(AppRoute::NotFound), ViewContent::Missing);
}
