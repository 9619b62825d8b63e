//! Error types for the Inventario console

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for Inventario operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
///
/// Status-derived variants keep the full response body so callers can pull
/// the server's own message out of it; only the displayed text is truncated.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authorized. Run `inventario login` to sign in.")]
    Unauthorized(String),

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden(String),

    #[error("Resource not found: {}", truncate_body(.0))]
    NotFound(String),

    #[error("Bad request: {}", truncate_body(.0))]
    BadRequest(String),

    #[error("Server error ({status}): {}", truncate_body(.body))]
    ServerError { status: u16, body: String },

    #[error("Unexpected status code {status}: {}", truncate_body(.body))]
    UnexpectedStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Rejected(String),
}

/// Maximum length for response bodies shown in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &body[..end], body.len())
}

impl ApiError {
    /// Map a non-success HTTP status and its body to an error.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let body = body.to_string();
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(body),
            StatusCode::FORBIDDEN => ApiError::Forbidden(body),
            StatusCode::NOT_FOUND => ApiError::NotFound(body),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(body)
            }
            s if s.is_server_error() => ApiError::ServerError {
                status: s.as_u16(),
                body,
            },
            s => ApiError::UnexpectedStatus {
                status: s.as_u16(),
                body,
            },
        }
    }

    /// HTTP status code behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::BadRequest(_) => Some(400),
            ApiError::ServerError { status, .. } | ApiError::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Raw response body, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized(b)
            | ApiError::Forbidden(b)
            | ApiError::NotFound(b)
            | ApiError::BadRequest(b)
            | ApiError::ServerError { body: b, .. }
            | ApiError::UnexpectedStatus { body: b, .. } => Some(b),
            _ => None,
        }
    }

    /// Message the server put in its error payload (`message`, then `error`).
    pub fn server_message(&self) -> Option<String> {
        if let ApiError::Rejected(msg) = self {
            return non_blank(msg);
        }

        let value: serde_json::Value = serde_json::from_str(self.body()?).ok()?;
        ["message", "error"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .find_map(non_blank)
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session and sign-in errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Not signed in. Run `inventario login --return-to {return_to}` to continue.")]
    LoginRequired { return_to: String },

    #[error("Email and password are required.")]
    EmptyCredentials,

    #[error("Sign-in failed: {0}")]
    LoginFailed(String),

    #[error("Failed to access token store: {0}")]
    Storage(String),
}
