use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Uniform response envelope returned by every Crisp endpoint:
/// `{ "error": bool, "reason": string, "data": <payload> }`.
///
/// The payload JSON is kept exactly as received. `T` only names the
/// documented payload shape; decode it with [`ApiResponse::data`]. An
/// application-level failure (`error: true`) is still a successful call at
/// this layer and the caller decides what to do with it.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ApiResponse<T = Value> {
    /// Whether the platform reported a failure
    pub error: bool,
    /// Machine-readable reason, e.g. `"resolved"` or `"not_found"`
    pub reason: String,
    /// Raw payload
    #[serde(default)]
    pub data: Value,
    #[serde(skip)]
    payload: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    /// Builds an envelope from its parts
    pub fn new(error: bool, reason: impl Into<String>, data: Value) -> Self {
        Self {
            error,
            reason: reason.into(),
            data,
            payload: PhantomData,
        }
    }

    /// Whether the platform reported an application-level failure
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// The untouched payload JSON
    pub fn raw_data(&self) -> &Value {
        &self.data
    }

    /// Re-labels the payload type without touching the JSON
    pub fn cast<U>(self) -> ApiResponse<U> {
        ApiResponse {
            error: self.error,
            reason: self.reason,
            data: self.data,
            payload: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes the payload into its documented type
    pub fn data(&self) -> Result<T, AppError> {
        T::deserialize(&self.data).map_err(|e| {
            AppError::Deserialization(format!("payload for reason '{}': {e}", self.reason))
        })
    }

    /// Consumes the envelope and decodes the payload
    pub fn into_data(self) -> Result<T, AppError> {
        serde_json::from_value(self.data).map_err(|e| {
            AppError::Deserialization(format!("payload for reason '{}': {e}", self.reason))
        })
    }
}

impl<T> Clone for ApiResponse<T> {
    fn clone(&self) -> Self {
        Self::new(self.error, self.reason.clone(), self.data.clone())
    }
}

impl<T> PartialEq for ApiResponse<T> {
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error && self.reason == other.reason && self.data == other.data
    }
}

impl<T> fmt::Debug for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("error", &self.error)
            .field("reason", &self.reason)
            .field("data", &self.data)
            .finish()
    }
}

impl<T> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Payload of operations documented as returning an empty object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Empty {}
