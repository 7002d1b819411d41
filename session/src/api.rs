//! Guarded backend resources and the response rules shared by every caller.
//!
//! SYSTEM CONTEXT
//! ==============
//! All `/api/...` endpoints require `Authorization: Bearer <token>`. The
//! browser and the CLI each own a thin transport, but both run the same
//! sequence: [`authorize`] before sending, [`check_status`] on the reply,
//! then [`settle`] so that a 401 from *any* endpoint clears the session.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::model::{Role, Session};
use crate::routes::RoleSet;
use crate::storage::KeyValueStorage;
use crate::store::SessionStore;

pub const NO_SESSION_MESSAGE: &str = "No hay sesión activa";
pub const ROLE_FORBIDDEN_MESSAGE: &str = "Acceso no autorizado";

/// Failure of a guarded request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No session to authenticate with; nothing was sent.
    #[error("No hay sesión activa")]
    NoSession,
    /// Backend rejected the token (401). The session is no longer valid.
    #[error("sesión inválida: {message}")]
    Unauthorized { message: String },
    /// Authenticated but not permitted for this action (403, or the local
    /// role check).
    #[error("{message}")]
    Forbidden { message: String },
    /// Any other non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// Backend could not be reached.
    #[error("Error de conexión con el servidor.")]
    Network(String),
    /// Success status but the body did not match the expected shape.
    #[error("respuesta inesperada: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this failure invalidated the session.
    #[must_use]
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn server_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_default()
}

/// Classify a reply status.
///
/// # Errors
///
/// Maps 401 to [`ApiError::Unauthorized`], 403 to [`ApiError::Forbidden`]
/// and any other non-2xx status to [`ApiError::Status`], carrying the
/// body's `error` field when present.
pub fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = server_message(body);
    Err(match status {
        401 => ApiError::Unauthorized { message },
        403 if message.is_empty() => ApiError::Forbidden { message: ROLE_FORBIDDEN_MESSAGE.to_owned() },
        403 => ApiError::Forbidden { message },
        _ => ApiError::Status { status, message },
    })
}

/// Decode a success body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the JSON does not match `T`.
pub fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check the session and role before a guarded request is sent.
///
/// # Errors
///
/// [`ApiError::NoSession`] without a session, [`ApiError::Forbidden`] when
/// the session's role is outside `required`.
pub fn authorize(session: Option<Session>, required: RoleSet) -> Result<Session, ApiError> {
    let session = session.ok_or(ApiError::NoSession)?;
    if !required.allows(session.role()) {
        return Err(ApiError::Forbidden { message: ROLE_FORBIDDEN_MESSAGE.to_owned() });
    }
    Ok(session)
}

/// Apply the session consequences of a guarded call's result.
///
/// A 401 clears the store, exactly like logout. Every other outcome leaves
/// the session untouched.
///
/// # Errors
///
/// Returns `result`'s error unchanged.
pub fn settle<S: KeyValueStorage, T>(store: &SessionStore<S>, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        if err.is_session_invalid() {
            tracing::warn!(error = %err, "guarded request unauthorized; clearing session");
            store.clear();
        }
    }
    result
}

/// Guarded backend collections and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    AdminSummary,
    GuardDashboard,
    Accesos,
    AccesosDetalle,
    Personas,
    Vehiculos,
    Alertas,
    Auditoria,
    Eventos,
    VehiculosEnPatio,
    Usuario,
}

impl Resource {
    pub const ALL: [Self; 11] = [
        Self::AdminSummary,
        Self::GuardDashboard,
        Self::Accesos,
        Self::AccesosDetalle,
        Self::Personas,
        Self::Vehiculos,
        Self::Alertas,
        Self::Auditoria,
        Self::Eventos,
        Self::VehiculosEnPatio,
        Self::Usuario,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::AdminSummary => "/api/admin/resumen",
            Self::GuardDashboard => "/api/dashboard_vigilante",
            Self::Accesos => "/api/accesos",
            Self::AccesosDetalle => "/api/admin/accesos",
            Self::Personas => "/api/personas",
            Self::Vehiculos => "/api/vehiculos",
            Self::Alertas => "/api/admin/alertas",
            Self::Auditoria => "/api/admin/auditoria",
            Self::Eventos => "/api/eventos",
            Self::VehiculosEnPatio => "/api/vigilante/vehiculos-en-patio",
            Self::Usuario => "/api/usuario",
        }
    }

    /// Short name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AdminSummary => "resumen",
            Self::GuardDashboard => "dashboard",
            Self::Accesos => "accesos",
            Self::AccesosDetalle => "reporte",
            Self::Personas => "personas",
            Self::Vehiculos => "vehiculos",
            Self::Alertas => "alertas",
            Self::Auditoria => "auditoria",
            Self::Eventos => "eventos",
            Self::VehiculosEnPatio => "patio",
            Self::Usuario => "usuario",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    #[must_use]
    pub fn required_roles(self) -> RoleSet {
        match self {
            Self::AdminSummary | Self::AccesosDetalle | Self::Alertas | Self::Auditoria => {
                RoleSet::Only(Role::Administrador)
            }
            _ => RoleSet::Any,
        }
    }
}

/// Query filters accepted by `GET /api/accesos`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessFilters {
    pub placa: Option<String>,
    pub tipo: Option<String>,
    pub desde: Option<String>,
    pub hasta: Option<String>,
}

impl AccessFilters {
    /// Non-empty filters as query pairs; the transport encodes them.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [("placa", &self.placa), ("tipo", &self.tipo), ("desde", &self.desde), ("hasta", &self.hasta)]
            .into_iter()
            .filter_map(|(k, v)| {
                v.as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| (k, s.to_owned()))
            })
            .collect()
    }
}

/// Path for `GET /api/buscar_placa/{placa}`.
///
/// Plates are upper-cased; anything other than ASCII letters, digits and
/// `-` is refused so the value can go into the path unescaped.
#[must_use]
pub fn plate_lookup_path(placa: &str) -> Option<String> {
    let placa = placa.trim().to_ascii_uppercase();
    if placa.is_empty() || !placa.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    Some(format!("/api/buscar_placa/{placa}"))
}

// =============================================================================
// RESPONSE BODIES
// =============================================================================

/// `GET /api/admin/resumen`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSummary {
    pub total_vehiculos: i64,
    pub total_accesos: i64,
    pub total_alertas: i64,
}

/// `GET /api/dashboard_vigilante`. History rows are `[hora, placa, estado]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardDashboard {
    pub historial: Vec<(String, String, String)>,
    pub alertas: i64,
    pub vehiculos: i64,
}

/// `GET /api/buscar_placa/{placa}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateLookup {
    pub placa: String,
    pub tipo: String,
    pub color: String,
    pub propietario: String,
}
