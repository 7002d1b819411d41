//! Navigation guard for protected views.
//!
//! The guard is a pure decision over the session read *at navigation time*.
//! It keeps no memory between navigations, so a session cleared by logout
//! or by a 401 takes effect on the very next route change.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::model::Session;
use crate::routes::{AppRoute, LOGIN_PATH, RoleSet, landing_path};
use crate::storage::KeyValueStorage;
use crate::store::SessionStore;

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Allow,
    /// Do not render; go to this path instead.
    Redirect(String),
}

/// Decide whether a protected view may render.
///
/// - No session: go to login. The requested path is not remembered.
/// - Role outside `required`: go to the landing page of the actual role.
/// - Otherwise allow.
#[must_use]
pub fn check(session: Option<&Session>, required: RoleSet) -> GuardDecision {
    match session {
        None => GuardDecision::Redirect(LOGIN_PATH.to_owned()),
        Some(session) if !required.allows(session.role()) => GuardDecision::Redirect(landing_path(session.role())),
        Some(_) => GuardDecision::Allow,
    }
}

/// Guard a navigation to `route`, re-reading the store.
///
/// Public routes always render, except the login view which sends an
/// already authenticated user to their landing page.
pub fn guard_navigation<S: KeyValueStorage>(store: &SessionStore<S>, route: AppRoute) -> GuardDecision {
    let session = store.load();
    match route.required_roles() {
        Some(required) => {
            let decision = check(session.as_ref(), required);
            if let GuardDecision::Redirect(to) = &decision {
                tracing::debug!(from = %route.path(), %to, "guard redirect");
            }
            decision
        }
        None if route == AppRoute::Login => session
            .map_or(GuardDecision::Allow, |s| GuardDecision::Redirect(landing_path(s.role()))),
        None => GuardDecision::Allow,
    }
}
