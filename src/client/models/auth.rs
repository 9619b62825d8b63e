//! Authentication models

use std::fmt;

use serde::Serialize;

/// Credentials posted to the sign-in endpoint
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "correo")]
    pub email: String,

    #[serde(rename = "contrasena")]
    pub password: String,
}

impl LoginRequest {
    /// Build a request; the email is trimmed, the password is sent as typed.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
