//! Client error types

use akeyless_core::Error as CoreError;
use thiserror::Error;

/// Result type alias using the client's error type
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single API call
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with a non-success status; `body` is the raw response
    #[error("{operation} returned {status}: {body}")]
    Api {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The request never produced a response
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected shape
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status of a structured API failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a structured API failure
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the API reported that the object does not exist
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Convert into the provider error taxonomy
    ///
    /// Structured failures keep the raw body; everything else carries the
    /// underlying error text.
    pub fn into_core(self, context: impl Into<String>) -> CoreError {
        match self {
            ApiError::Api { status, body, .. } => CoreError::api(context, status, body),
            other => CoreError::transport(context, other.to_string()),
        }
    }
}

/// Carries the client error over with its text unchanged
impl From<ApiError> for CoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Api {
                operation,
                status,
                body,
            } => CoreError::api(format!("{} returned {}", operation, status), status, body),
            ApiError::Transport { operation, source } => {
                CoreError::transport(format!("{} request failed", operation), source.to_string())
            }
            ApiError::Decode { operation, source } => CoreError::transport(
                format!("failed to decode {} response", operation),
                source.to_string(),
            ),
            ApiError::Client(source) => {
                CoreError::transport("failed to build HTTP client", source.to_string())
            }
        }
    }
}
