//! Route-guard glue between `leptos_router` locations and the session
//! contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: every
//! navigation resolves its pathname here, synchronously, before any
//! protected content is built.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use session::guard::guard_navigation;
use session::routes::LOGIN_PATH;
use session::{ApiError, AppRoute, GuardDecision, KeyValueStorage, Session, SessionStore};

/// What the router should do for a pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Build the view. Protected routes always carry the session they were
    /// admitted with.
    Render { route: AppRoute, session: Option<Session> },
    /// Replace the location with this path.
    Redirect(String),
}

/// Resolve a pathname against the current session.
///
/// Section roots such as `/admin` are admitted, then sent to their canonical
/// landing path so the address bar matches the rendered view.
pub fn resolve<S: KeyValueStorage>(store: &SessionStore<S>, pathname: &str) -> Navigation {
    let route = AppRoute::parse(pathname);
    if let GuardDecision::Redirect(to) = guard_navigation(store, route) {
        return Navigation::Redirect(to);
    }
    if route.required_roles().is_none() {
        return Navigation::Render { route, session: None };
    }
    let canonical = route.path();
    if pathname.trim_end_matches('/') != canonical {
        return Navigation::Redirect(canonical);
    }
    Navigation::Render { route, session: store.load() }
}

/// Where to go after a failed guarded call, if anywhere.
///
/// A 401 has already cleared the store, and a missing session means it was
/// cleared elsewhere. Either way the view must leave for login.
pub fn redirect_after_error(err: &ApiError) -> Option<&'static str> {
    (err.is_session_invalid() || matches!(err, ApiError::NoSession)).then_some(LOGIN_PATH)
}
