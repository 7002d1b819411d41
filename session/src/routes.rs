//! Route table: every view path, its required roles, and per-role landing
//! pages.
//!
//! DESIGN
//! ======
//! Paths live here rather than in the router so the guard, the login flow,
//! the UI menus and the CLI all agree on where a role lands.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::model::Role;

/// Public login view.
pub const LOGIN_PATH: &str = "/login";
/// Administrador section root; redirects to its landing page.
pub const ADMIN_ROOT: &str = "/admin";
/// Vigilante section root; redirects to its landing page.
pub const VIGILANTE_ROOT: &str = "/vigilante";
/// Older menu segment for the people view, accepted in both sections.
const GESTION_ALIAS: &str = "gestion";

/// Which authenticated roles may enter a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleSet {
    /// Any authenticated role.
    Any,
    /// Exactly this role.
    Only(Role),
}

impl RoleSet {
    #[must_use]
    pub fn allows(self, role: Role) -> bool {
        match self {
            Self::Any => true,
            Self::Only(required) => required == role,
        }
    }
}

/// Views under `/admin/...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminView {
    Inicio,
    Historial,
    Personas,
    Vehiculos,
    Reportes,
    Auditoria,
    Alertas,
    Calendario,
}

impl AdminView {
    pub const ALL: [Self; 8] = [
        Self::Inicio,
        Self::Historial,
        Self::Personas,
        Self::Vehiculos,
        Self::Reportes,
        Self::Auditoria,
        Self::Alertas,
        Self::Calendario,
    ];

    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Inicio => "inicio",
            Self::Historial => "historial",
            Self::Personas => "personas",
            Self::Vehiculos => "vehiculos",
            Self::Reportes => "reportes",
            Self::Auditoria => "auditoria",
            Self::Alertas => "alertas",
            Self::Calendario => "calendario",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inicio => "Inicio",
            Self::Historial => "Historial de accesos",
            Self::Personas => "Personas",
            Self::Vehiculos => "Vehículos",
            Self::Reportes => "Reportes",
            Self::Auditoria => "Auditoría",
            Self::Alertas => "Alertas",
            Self::Calendario => "Calendario",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        if segment == GESTION_ALIAS {
            return Some(Self::Personas);
        }
        Self::ALL.into_iter().find(|v| v.segment() == segment)
    }
}

/// Views under `/vigilante/...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VigilanteView {
    Inicio,
    Historial,
    Personas,
    Vehiculos,
    Patio,
    Calendario,
}

impl VigilanteView {
    pub const ALL: [Self; 6] =
        [Self::Inicio, Self::Historial, Self::Personas, Self::Vehiculos, Self::Patio, Self::Calendario];

    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Inicio => "inicio",
            Self::Historial => "historial",
            Self::Personas => "personas",
            Self::Vehiculos => "vehiculos",
            Self::Patio => "patio",
            Self::Calendario => "calendario",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inicio => "Inicio",
            Self::Historial => "Historial de accesos",
            Self::Personas => "Personas",
            Self::Vehiculos => "Vehículos",
            Self::Patio => "Vehículos en patio",
            Self::Calendario => "Calendario",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        if segment == GESTION_ALIAS {
            return Some(Self::Personas);
        }
        Self::ALL.into_iter().find(|v| v.segment() == segment)
    }
}

/// A resolved application route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Admin(AdminView),
    Vigilante(VigilanteView),
    NotFound,
}

impl AppRoute {
    /// Resolve a location path. `/` is the login view and section roots
    /// resolve to their landing page. Query strings and fragments are
    /// ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let mut parts = trimmed.trim_start_matches('/').split('/');
        let section = parts.next().unwrap_or_default();
        let view = parts.next();
        if parts.next().is_some() {
            return Self::NotFound;
        }
        match (section, view) {
            ("" | "login", None) => Self::Login,
            ("admin", None) => Self::Admin(AdminView::Inicio),
            ("admin", Some(seg)) => AdminView::from_segment(seg).map_or(Self::NotFound, Self::Admin),
            ("vigilante", None) => Self::Vigilante(VigilanteView::Inicio),
            ("vigilante", Some(seg)) => VigilanteView::from_segment(seg).map_or(Self::NotFound, Self::Vigilante),
            _ => Self::NotFound,
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Admin(view) => format!("{ADMIN_ROOT}/{}", view.segment()),
            Self::Vigilante(view) => format!("{VIGILANTE_ROOT}/{}", view.segment()),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Roles allowed to enter, or `None` for public routes.
    #[must_use]
    pub fn required_roles(self) -> Option<RoleSet> {
        match self {
            Self::Login | Self::NotFound => None,
            Self::Admin(_) => Some(RoleSet::Only(Role::Administrador)),
            Self::Vigilante(_) => Some(RoleSet::Only(Role::Vigilante)),
        }
    }

    /// Default view a role is sent to after login or a guard redirect.
    #[must_use]
    pub fn landing(role: Role) -> Self {
        match role {
            Role::Administrador => Self::Admin(AdminView::Inicio),
            Role::Vigilante => Self::Vigilante(VigilanteView::Inicio),
        }
    }
}

/// Landing path for a role.
#[must_use]
pub fn landing_path(role: Role) -> String {
    AppRoute::landing(role).path()
}

/// One entry of a role's navigation menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: String,
}

/// Navigation menu for a role, landing page first.
#[must_use]
pub fn menu(role: Role) -> Vec<MenuEntry> {
    match role {
        Role::Administrador => AdminView::ALL
            .into_iter()
            .map(|v| MenuEntry { label: v.label(), path: AppRoute::Admin(v).path() })
            .collect(),
        Role::Vigilante => VigilanteView::ALL
            .into_iter()
            .map(|v| MenuEntry { label: v.label(), path: AppRoute::Vigilante(v).path() })
            .collect(),
    }
}
