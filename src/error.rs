//! Error types shared by the transport, the client façade and every resource.
//!
//! Two failure families reach callers through `AppError`:
//! - transport failures (network errors, non-2xx responses without a
//!   parseable envelope, undecodable bodies)
//! - local encoding failures (a request body that cannot be serialized)
//!
//! Application-level failures (`{"error": true, "reason": "..."}`) are NOT
//! errors at this layer: they arrive as a regular `ApiResponse` and the caller
//! branches on `ApiResponse::is_error`.

use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type ApiResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The HTTP exchange failed before a response could be read
    Network(reqwest::Error),
    /// The server answered with a status code and no usable envelope
    Unexpected(StatusCode),
    /// A request body could not be turned into JSON
    Serialization(String),
    /// A response envelope or payload did not match the expected shape
    Deserialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}
