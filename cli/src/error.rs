use session::{ApiError, AuthError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid role `{0}`; expected Administrador or Vigilante")]
    InvalidRole(String),
    #[error("unknown resource `{0}`")]
    UnknownResource(String),
    #[error("missing plate; usage: smartcar get placa <PLACA>")]
    MissingPlate,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    /// True when the backend rejected the stored token.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_session_invalid())
    }
}
