//! Error types for the Unda portal client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//!
//! HTTP error statuses are deliberately NOT represented here: the client
//! returns the response body for every status and leaves interpretation to
//! the caller. [`classify_status`] is the helper callers use for that.

use thiserror::Error;

/// Errors that can occur when talking to the portal API.
///
/// Only transport-level failures (connect, timeout, body read) and JSON
/// parse failures surface as errors.
#[derive(Error, Debug)]
pub enum PortalApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic API error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with PortalApiError
pub type PortalApiResult<T> = Result<T, PortalApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Caller-side interpretation of an HTTP status code.
///
/// The client itself never branches on status; UIs use this to turn a
/// status into a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400/401 - wrong username/password or malformed credentials
    InvalidCredentials,

    /// 403 - account locked or otherwise restricted
    AccessRestricted,

    /// 404 - no such resource
    NotFound,

    /// 409 - duplicate registration (email or phone already taken)
    Conflict,

    /// 5xx - the portal itself failed
    ServerError,

    /// Anything else
    Unexpected,
}

impl ErrorKind {
    /// Sanitized message suitable for showing to an end user.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::InvalidCredentials => "Incorrect username or password.",
            ErrorKind::AccessRestricted => "Account access restricted.",
            ErrorKind::Conflict => "An account with these details already exists.",
            ErrorKind::NotFound | ErrorKind::ServerError | ErrorKind::Unexpected => {
                "Unable to connect to server. Please try again later."
            }
        }
    }
}

/// Classify an HTTP status code into an [`ErrorKind`].
///
/// Kept separate from transport concerns: callers apply it to the status
/// they observed, typically after a registration or login call.
pub fn classify_status(status: u16) -> ErrorKind {
    match status {
        400 | 401 => ErrorKind::InvalidCredentials,
        403 => ErrorKind::AccessRestricted,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        500..=599 => ErrorKind::ServerError,
        _ => ErrorKind::Unexpected,
    }
}
