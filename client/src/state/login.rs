//! Login form view model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page wraps this in a signal. Validation happens in
//! [`LoginFormState::begin_submit`] so a bad form never reaches the network.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use session::auth::LOGIN_SUCCESS_MESSAGE;
use session::{AuthError, LoginRequest, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Message shown under the login button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginAlert {
    pub kind: AlertKind,
    pub text: String,
}

impl LoginAlert {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            AlertKind::Success => "login-alert login-alert--success",
            AlertKind::Error => "login-alert login-alert--error",
        }
    }
}

/// Form fields plus in-flight and alert state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub usuario: String,
    pub clave: String,
    pub rol: Option<Role>,
    pub busy: bool,
    pub alert: Option<LoginAlert>,
}

impl LoginFormState {
    /// Start a submission.
    ///
    /// Returns the request to send, or `None` when an exchange is already in
    /// flight or the form is invalid (the alert then says why).
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.busy {
            return None;
        }
        self.alert = None;
        match LoginRequest::from_form(&self.usuario, &self.clave, self.rol) {
            Ok(request) => {
                self.busy = true;
                Some(request)
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// The exchange succeeded; navigation follows.
    pub fn succeed(&mut self) {
        self.alert = Some(LoginAlert { kind: AlertKind::Success, text: LOGIN_SUCCESS_MESSAGE.to_owned() });
    }

    /// The exchange failed or the form was invalid.
    pub fn fail(&mut self, err: &AuthError) {
        self.busy = false;
        self.alert = Some(LoginAlert { kind: AlertKind::Error, text: err.to_string() });
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.busy { "Iniciando..." } else { "Iniciar Sesión" }
    }
}
