use super::*;
use crate::model::{Role, SessionUser};
use crate::routes::{AdminView, VigilanteView};
use crate::storage::MemoryStorage;
use crate::store::{TOKEN_KEY, USER_INFO_KEY};

fn session(rol: Role) -> Session {
    Session {
        token: "abc".to_owned(),
        user: SessionUser { nombre: "Ana".to_owned(), rol, usuario: None },
    }
}

fn store_with(rol: Role) -> SessionStore<MemoryStorage> {
    let store = SessionStore::new(MemoryStorage::new());
    let s = session(rol);
    store.save(&s.token, &s.user);
    store
}

fn protected_routes() -> Vec<AppRoute> {
    AdminView::ALL
        .into_iter()
        .map(AppRoute::Admin)
        .chain(VigilanteView::ALL.into_iter().map(AppRoute::Vigilante))
        .collect()
}

// =============================================================
// check
// =============================================================

#[test]
fn absent_session_redirects_to_login_for_every_role_set() {
    for required in [RoleSet::Any, RoleSet::Only(Role::Administrador), RoleSet::Only(Role::Vigilante)] {
        assert_eq!(check(None, required), GuardDecision::Redirect("/login".to_owned()));
    }
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(check(Some(&session(Role::Vigilante)), RoleSet::Any), GuardDecision::Allow);
    assert_eq!(
        check(Some(&session(Role::Administrador)), RoleSet::Only(Role::Administrador)),
        GuardDecision::Allow
    );
}

#[test]
fn mismatched_role_redirects_to_own_landing() {
    assert_eq!(
        check(Some(&session(Role::Vigilante)), RoleSet::Only(Role::Administrador)),
        GuardDecision::Redirect("/vigilante/inicio".to_owned())
    );
    assert_eq!(
        check(Some(&session(Role::Administrador)), RoleSet::Only(Role::Vigilante)),
        GuardDecision::Redirect("/admin/inicio".to_owned())
    );
}

// =============================================================
// guard_navigation
// =============================================================

#[test]
fn absent_session_never_renders_a_protected_route() {
    let store = SessionStore::new(MemoryStorage::new());
    for route in protected_routes() {
        assert_eq!(guard_navigation(&store, route), GuardDecision::Redirect("/login".to_owned()));
    }
}

#[test]
fn vigilante_never_renders_admin_routes() {
    let store = store_with(Role::Vigilante);
    for view in AdminView::ALL {
        assert_eq!(
            guard_navigation(&store, AppRoute::Admin(view)),
            GuardDecision::Redirect("/vigilante/inicio".to_owned())
        );
    }
}

#[test]
fn vigilante_renders_own_routes() {
    let store = store_with(Role::Vigilante);
    for view in VigilanteView::ALL {
        assert_eq!(guard_navigation(&store, AppRoute::Vigilante(view)), GuardDecision::Allow);
    }
}

#[test]
fn login_view_is_public_without_session() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(guard_navigation(&store, AppRoute::Login), GuardDecision::Allow);
    assert_eq!(guard_navigation(&store, AppRoute::NotFound), GuardDecision::Allow);
}

#[test]
fn login_view_sends_authenticated_user_to_landing() {
    let store = store_with(Role::Administrador);
    assert_eq!(
        guard_navigation(&store, AppRoute::Login),
        GuardDecision::Redirect("/admin/inicio".to_owned())
    );
}

#[test]
fn guard_rereads_store_on_each_navigation() {
    let store = store_with(Role::Administrador);
    let route = AppRoute::Admin(AdminView::Personas);
    assert_eq!(guard_navigation(&store, route), GuardDecision::Allow);
    store.clear();
    assert_eq!(guard_navigation(&store, route), GuardDecision::Redirect("/login".to_owned()));
}

#[test]
fn corrupt_user_info_redirects_to_login() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc");
    storage.set(USER_INFO_KEY, "not-json");
    let store = SessionStore::new(storage);
    assert_eq!(store.load(), None);
    assert_eq!(
        guard_navigation(&store, AppRoute::Admin(AdminView::Inicio)),
        GuardDecision::Redirect("/login".to_owned())
    );
}
