//! REST API helpers for communicating with the backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs that report the backend as unreachable, since these
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every guarded call funnels through [`fetch_json`], which runs the
//! session contract in order: local role check, bearer header, status
//! classification, and finally `settle`, which clears the session on 401.
//! Callers get `Result`s and never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use session::api::{self, PlateLookup, plate_lookup_path};
#[cfg(feature = "csr")]
use session::auth::{LOGIN_ENDPOINT, complete_login};
use session::{ApiError, AuthError, KeyValueStorage, LoginRequest, Resource, RoleSet, Session, SessionStore};

/// Backend used when `SMARTCAR_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const INVALID_PLATE_MESSAGE: &str = "Placa inválida";

/// Backend base URL without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("SMARTCAR_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

/// Absolute URL for a backend path.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// Run the login exchange and, on success, store the session.
///
/// Returns the landing path for the role the backend assigned.
///
/// # Errors
///
/// [`AuthError::Rejected`] with the server message, or
/// [`AuthError::Network`] when the backend is unreachable.
pub async fn login<S: KeyValueStorage>(store: &SessionStore<S>, request: &LoginRequest) -> Result<String, AuthError> {
    #[cfg(feature = "csr")]
    {
        use session::LoginResponse;
        use session::auth::network_failure;

        let resp = gloo_net::http::Request::post(&api_url(LOGIN_ENDPOINT))
            .json(request)
            .map_err(network_failure)?
            .send()
            .await
            .map_err(network_failure)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network_failure)?;
        complete_login(store, LoginResponse::from_http(status, &body))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, request);
        Err(AuthError::Network("not available outside the browser".to_owned()))
    }
}

async fn send_guarded(session: &Session, path: &str, query: &[(&'static str, String)]) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
        let resp = gloo_net::http::Request::get(&api_url(path))
            .header("Authorization", &session.bearer())
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(network)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network)?;
        api::check_status(status, &body)?;
        Ok(body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path, query);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Guarded `GET` of any backend path.
///
/// # Errors
///
/// Any [`ApiError`]. On [`ApiError::Unauthorized`] the session has already
/// been cleared when this returns.
pub async fn fetch_json<S, T>(
    store: &SessionStore<S>,
    path: &str,
    required: RoleSet,
    query: &[(&'static str, String)],
) -> Result<T, ApiError>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    let session = api::authorize(store.load(), required)?;
    let result = match send_guarded(&session, path, query).await {
        Ok(body) => api::decode(&body),
        Err(e) => Err(e),
    };
    #[cfg(feature = "csr")]
    if let Err(e) = &result {
        log::warn!("GET {path} failed: {e}");
    }
    api::settle(store, result)
}

/// Guarded `GET` of a catalog resource.
///
/// # Errors
///
/// See [`fetch_json`].
pub async fn fetch_resource<S, T>(
    store: &SessionStore<S>,
    resource: Resource,
    query: &[(&'static str, String)],
) -> Result<T, ApiError>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    fetch_json(store, resource.path(), resource.required_roles(), query).await
}

/// Look a plate up via `GET /api/buscar_placa/{placa}`.
///
/// # Errors
///
/// [`ApiError::Status`] with status 400 for a malformed plate (nothing is
/// sent), otherwise see [`fetch_json`].
pub async fn lookup_plate<S: KeyValueStorage>(store: &SessionStore<S>, placa: &str) -> Result<PlateLookup, ApiError> {
    let Some(path) = plate_lookup_path(placa) else {
        return Err(ApiError::Status { status: 400, message: INVALID_PLATE_MESSAGE.to_owned() });
    };
    fetch_json(store, &path, RoleSet::Any, &[]).await
}
