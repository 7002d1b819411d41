//! Session identity types shared by every consumer of the contract.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Facility staff category. Decides which routes are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Administrador,
    Vigilante,
}

impl Role {
    /// Every role, in menu order.
    pub const ALL: [Self; 2] = [Self::Administrador, Self::Vigilante];

    /// Wire name as sent to and returned by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Administrador => "Administrador",
            Self::Vigilante => "Vigilante",
        }
    }

    /// Parse a wire role name. Matching is exact, as on the backend.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Administrador" => Some(Self::Administrador),
            "Vigilante" => Some(Self::Vigilante),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record returned by `POST /login` and persisted under `user_info`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name.
    pub nombre: String,
    /// Authoritative role issued by the backend for this token.
    pub rol: Role,
    /// Login name, when the backend echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
}

/// A complete session: bearer token plus the identity it was issued for.
///
/// An absent session is modeled as `Option::<Session>::None`; there is no
/// partially filled variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    #[must_use]
    pub fn role(&self) -> Role {
        self.user.rol
    }

    /// Value for the `Authorization` header of guarded requests.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
