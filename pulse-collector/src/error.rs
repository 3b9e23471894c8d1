//! Error types
//!
//! Every failure while talking to Glue or EMR ends up in [`UpstreamError`].
//! The invocation boundary only ever renders errors to text; the variants
//! exist so the text names the service and operation that failed.

use pulse_client::ClientError;
use thiserror::Error;

/// A failed or unusable call to one of the upstream services
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// A Glue operation failed
    #[error("Glue {operation} failed: {source}")]
    Glue {
        operation: &'static str,
        #[source]
        source: ClientError,
    },

    /// An EMR operation failed
    #[error("EMR {operation} failed: {source}")]
    Emr {
        operation: &'static str,
        #[source]
        source: ClientError,
    },

    /// A call succeeded but its response can't be used
    #[error("Malformed {service} {operation} response: {message}")]
    MalformedResponse {
        service: &'static str,
        operation: &'static str,
        message: String,
    },
}

impl UpstreamError {
    /// Adapter for `map_err` on Glue client calls
    pub fn glue(operation: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Glue { operation, source }
    }

    /// Adapter for `map_err` on EMR client calls
    pub fn emr(operation: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Emr { operation, source }
    }

    pub fn malformed(
        service: &'static str,
        operation: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedResponse {
            service,
            operation,
            message: message.into(),
        }
    }
}

/// Reasons an invocation produced no report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The start of the lookback window can't be represented
    #[error("Lookback window of {hours} hours reaches past the earliest supported time")]
    WindowOutOfRange { hours: i64 },
}
