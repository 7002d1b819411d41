//! Durable holder for the current [`Session`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected view and every guarded request reads the session through
//! this type. Login is the only writer of a new session; logout and a 401 on
//! a guarded call are the only paths that clear it.
//!
//! ERROR HANDLING
//! ==============
//! A corrupt `user_info` slot is logged and reported as an absent session.
//! Nothing here returns an error or panics.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::model::{Session, SessionUser};
use crate::storage::KeyValueStorage;

/// Storage slot holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage slot holding the JSON-encoded [`SessionUser`].
pub const USER_INFO_KEY: &str = "user_info";

/// Session persistence over a [`KeyValueStorage`] backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist a session.
    ///
    /// The token slot is dropped before the user record is written and is
    /// written last, so a reader can never observe a token paired with a
    /// stale or missing user.
    ///
    /// The token must be non-empty. An empty token is refused and the
    /// stored session is left as it was.
    pub fn save(&self, token: &str, user: &SessionUser) {
        if token.is_empty() {
            tracing::warn!("refusing to save a session with an empty token");
            return;
        }
        let raw_user = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode session user; session not saved");
                return;
            }
        };
        self.storage.remove(TOKEN_KEY);
        self.storage.set(USER_INFO_KEY, &raw_user);
        self.storage.set(TOKEN_KEY, token);
        tracing::debug!(rol = %user.rol, "session saved");
    }

    /// Read the session back, or `None` when it is absent or unreadable.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = self.storage.get(USER_INFO_KEY)?;
        match serde_json::from_str::<SessionUser>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                tracing::warn!(error = %e, "stored user_info is malformed; treating session as absent");
                None
            }
        }
    }

    /// Remove both slots. Safe to call when nothing is stored.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_INFO_KEY);
        tracing::debug!("session cleared");
    }

    /// Convenience read used by views at mount time.
    pub fn current_session(&self) -> Option<Session> {
        self.load()
    }
}
