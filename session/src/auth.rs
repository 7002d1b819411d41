//! Login exchange and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transport lives in the callers (`gloo-net` in the browser, `reqwest` in
//! the CLI). This module validates the form before any request, interprets
//! the `POST /login` reply as a tagged [`LoginResponse`], and performs the
//! store write plus landing-page choice on success.
//!
//! The role picked in the form is only a hint for the backend. Routing after
//! login always uses the role the backend returned.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::model::{Role, SessionUser};
use crate::routes::{LOGIN_PATH, landing_path};
use crate::storage::KeyValueStorage;
use crate::store::SessionStore;

/// Path of the credential exchange endpoint.
pub const LOGIN_ENDPOINT: &str = "/login";

pub const MISSING_ROLE_MESSAGE: &str = "Debe seleccionar un rol.";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Ingrese usuario y contraseña.";
pub const NETWORK_ERROR_MESSAGE: &str = "Error de conexión con el servidor.";
pub const FALLBACK_REJECTION_MESSAGE: &str = "Error de autenticación";
pub const INVALID_RESPONSE_MESSAGE: &str = "Respuesta inválida del servidor";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Inicio de sesión exitoso";

/// Why a login attempt produced no session. `Display` is the user-facing
/// message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Form incomplete; no request was sent.
    #[error("{0}")]
    Validation(&'static str),
    /// Backend answered with a failure; message comes from the server.
    #[error("{message}")]
    Rejected { status: Option<u16>, message: String },
    /// Backend could not be reached.
    #[error("Error de conexión con el servidor.")]
    Network(String),
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub clave: String,
    pub rol: Role,
}

impl LoginRequest {
    /// Build a request from raw form values.
    ///
    /// The role is checked first, then both credentials. The username is
    /// trimmed; the password is sent exactly as typed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when the role is missing or either
    /// credential is blank.
    pub fn from_form(usuario: &str, clave: &str, rol: Option<Role>) -> Result<Self, AuthError> {
        let rol = rol.ok_or(AuthError::Validation(MISSING_ROLE_MESSAGE))?;
        let usuario = usuario.trim();
        if usuario.is_empty() || clave.is_empty() {
            return Err(AuthError::Validation(MISSING_CREDENTIALS_MESSAGE));
        }
        Ok(Self { usuario: usuario.to_owned(), clave: clave.to_owned(), rol })
    }
}

/// Interpreted reply of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginResponse {
    Ok { token: String, user: SessionUser },
    Err { status: u16, message: String },
}

#[derive(Deserialize)]
struct SuccessBody {
    token: String,
    user: SessionUser,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl LoginResponse {
    /// Interpret a status code and raw body.
    ///
    /// A success status whose body lacks a non-empty token or a well-formed
    /// user is treated as a rejection so that no half session is stored.
    #[must_use]
    pub fn from_http(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            return match serde_json::from_str::<SuccessBody>(body) {
                Ok(ok) if !ok.token.is_empty() => Self::Ok { token: ok.token, user: ok.user },
                _ => Self::Err { status, message: INVALID_RESPONSE_MESSAGE.to_owned() },
            };
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_REJECTION_MESSAGE.to_owned());
        Self::Err { status, message }
    }
}

/// Finish a login exchange: store the session and pick the landing path.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for a failed exchange. The store is not
/// touched in that case.
pub fn complete_login<S: KeyValueStorage>(
    store: &SessionStore<S>,
    response: LoginResponse,
) -> Result<String, AuthError> {
    match response {
        LoginResponse::Ok { token, user } => {
            store.save(&token, &user);
            tracing::info!(rol = %user.rol, "login succeeded");
            Ok(landing_path(user.rol))
        }
        LoginResponse::Err { status, message } => {
            tracing::info!(status, "login rejected");
            Err(AuthError::Rejected { status: Some(status), message })
        }
    }
}

/// Map a transport failure into the user-facing error.
#[must_use]
pub fn network_failure(error: impl std::fmt::Display) -> AuthError {
    tracing::warn!(error = %error, "login request failed");
    AuthError::Network(error.to_string())
}

/// End the session locally and return the login path.
///
/// No backend call is made; the token is simply dropped.
pub fn logout<S: KeyValueStorage>(store: &SessionStore<S>) -> &'static str {
    store.clear();
    LOGIN_PATH
}
