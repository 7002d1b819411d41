//! One function per CLI command.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` parses arguments and prints; everything here works on a
//! `SessionStore` and a `Backend` so integration tests can drive it
//! against a fake server with a temporary session file.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use serde_json::Value;
use session::api::{AccessFilters, authorize, plate_lookup_path, settle};
use session::{KeyValueStorage, LoginRequest, Resource, Role, RoleSet, Session, SessionStore};

use crate::backend::Backend;
use crate::error::CliError;

/// Name that selects the plate lookup instead of a catalog resource.
pub const PLATE_TARGET: &str = "placa";

/// What `smartcar get` fetches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GetTarget {
    Resource { resource: Resource, filters: AccessFilters },
    Plate(String),
}

impl GetTarget {
    /// Resolve the positional arguments of `get`.
    ///
    /// Filters only apply to the access history and are dropped otherwise.
    ///
    /// # Errors
    ///
    /// [`CliError::UnknownResource`] for a name outside the catalog and
    /// [`CliError::MissingPlate`] for `placa` without a value.
    pub fn parse(name: &str, plate: Option<&str>, filters: AccessFilters) -> Result<Self, CliError> {
        if name == PLATE_TARGET {
            let plate = plate.filter(|p| !p.trim().is_empty()).ok_or(CliError::MissingPlate)?;
            return Ok(Self::Plate(plate.trim().to_owned()));
        }
        let resource = Resource::from_name(name).ok_or_else(|| CliError::UnknownResource(name.to_owned()))?;
        let filters = if resource == Resource::Accesos { filters } else { AccessFilters::default() };
        Ok(Self::Resource { resource, filters })
    }

    fn required_roles(&self) -> RoleSet {
        match self {
            Self::Resource { resource, .. } => resource.required_roles(),
            Self::Plate(_) => RoleSet::Any,
        }
    }
}

/// Parse the `--rol` flag; absent means "not selected".
///
/// # Errors
///
/// [`CliError::InvalidRole`] for anything other than the exact role names.
pub fn parse_role(raw: Option<&str>) -> Result<Option<Role>, CliError> {
    raw.map(|r| Role::parse(r).ok_or_else(|| CliError::InvalidRole(r.to_owned()))).transpose()
}

/// Log in and store the session. Returns the landing path of the role the
/// backend assigned, which may differ from the requested one.
///
/// # Errors
///
/// Validation, rejection and network failures as [`CliError::Auth`].
pub async fn login<S: KeyValueStorage>(
    backend: &Backend,
    store: &SessionStore<S>,
    usuario: &str,
    clave: &str,
    rol: Option<Role>,
) -> Result<String, CliError> {
    let request = LoginRequest::from_form(usuario, clave, rol)?;
    let response = backend.login(&request).await?;
    Ok(session::auth::complete_login(store, response)?)
}

/// Drop the stored session. Works offline.
pub fn logout<S: KeyValueStorage>(store: &SessionStore<S>) -> &'static str {
    session::auth::logout(store)
}

/// The stored session, without contacting the backend.
///
/// # Errors
///
/// [`session::ApiError::NoSession`] when nobody is logged in.
pub fn whoami<S: KeyValueStorage>(store: &SessionStore<S>) -> Result<Session, CliError> {
    Ok(authorize(store.load(), RoleSet::Any)?)
}

/// Guarded fetch of one target.
///
/// The role check runs locally first, so a forbidden resource never
/// reaches the network. A 401 clears the session file before returning.
///
/// # Errors
///
/// Any [`session::ApiError`] wrapped in [`CliError::Api`].
pub async fn get<S: KeyValueStorage>(
    backend: &Backend,
    store: &SessionStore<S>,
    target: &GetTarget,
) -> Result<Value, CliError> {
    let current = authorize(store.load(), target.required_roles())?;
    let result = match target {
        GetTarget::Resource { resource, filters } => {
            backend.get_json(&current, resource.path(), &filters.query_pairs()).await
        }
        GetTarget::Plate(raw) => match plate_lookup_path(raw) {
            Some(path) => backend.get_json(&current, &path, &[]).await,
            None => Err(session::ApiError::Status { status: 400, message: format!("invalid plate `{raw}`") }),
        },
    };
    Ok(settle(store, result)?)
}
