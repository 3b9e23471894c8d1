//! Error types for the Pulse client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling Glue or EMR
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("{code} (status {status}): {message}")]
    ServiceError {
        /// HTTP status code
        status: u16,
        /// Service error code, e.g. `ThrottlingException`
        code: String,
        /// Error message from the service
        message: String,
    },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create a service error from status code, error code and message
    pub fn service_error(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ServiceError {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Build a service error from a non-success response body
    ///
    /// AWS JSON services answer with `{"__type": "ns#Code", "message": "..."}`
    /// (some use `Message`). Bodies that don't follow that shape are kept
    /// verbatim as the message.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            #[serde(rename = "__type")]
            kind: Option<String>,
            #[serde(alias = "Message")]
            message: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => {
                let code = parsed
                    .kind
                    .as_deref()
                    .map(|kind| kind.rsplit('#').next().unwrap_or(kind).to_string())
                    .unwrap_or_else(|| "UnknownError".to_string());
                let message = parsed.message.unwrap_or_else(|| body.to_string());
                Self::service_error(status, code, message)
            }
            Err(_) => Self::service_error(status, "UnknownError", body),
        }
    }
}
