//! HTTP transport to the SmartCar backend.
//!
//! Thin `reqwest` wrapper: it knows URLs, the bearer header and how to turn
//! a response into the shared `session` result types. Session bookkeeping
//! (role check, clearing on 401) stays in `commands`.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use session::api::check_status;
use session::auth::{LOGIN_ENDPOINT, network_failure};
use session::{ApiError, AuthError, LoginRequest, LoginResponse, Session};

use crate::error::CliError;

#[derive(Clone, Debug)]
pub struct Backend {
    base_url: String,
    http: reqwest::Client,
}

impl Backend {
    /// # Errors
    ///
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url: base_url.trim_end_matches('/').to_owned(), http })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// [`AuthError::Network`] when no HTTP response was received. Any
    /// response, including a rejection, comes back as a [`LoginResponse`].
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let response = self
            .http
            .post(self.url(LOGIN_ENDPOINT))
            .json(request)
            .send()
            .await
            .map_err(network_failure)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_failure)?;
        Ok(LoginResponse::from_http(status, &body))
    }

    /// Authenticated `GET` returning the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Status failures classified by [`check_status`], transport failures
    /// as [`ApiError::Network`], bad bodies as [`ApiError::Decode`].
    pub async fn get_json(
        &self,
        session: &Session,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Value, ApiError> {
        let network = |e: reqwest::Error| ApiError::Network(e.to_string());
        let response = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, session.bearer())
            .query(query)
            .send()
            .await
            .map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        tracing::debug!(path, status, "guarded GET");
        check_status(status, &body)?;
        session::api::decode(&body)
    }
}
