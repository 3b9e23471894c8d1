//! Pulse HTTP Client
//!
//! A small, type-safe client for the two AWS JSON 1.1 services the report
//! reads from: Glue (job runs) and EMR (clusters).
//!
//! Every operation is a `POST /` with the operation named in the
//! `X-Amz-Target` header and a JSON body. Request signing is not done here:
//! point the clients at a signing proxy or a local emulator, or inject a
//! preconfigured [`reqwest::Client`] with [`GlueClient::with_client`] /
//! [`EmrClient::with_client`].
//!
//! # Example
//!
//! ```no_run
//! use pulse_client::GlueClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let glue = GlueClient::new("http://localhost:4566");
//!
//!     let page = glue.get_jobs(None).await?;
//!     for job in page.jobs {
//!         println!("{}", job.name);
//!     }
//!     Ok(())
//! }
//! ```

mod emr;
pub mod error;
mod glue;

// Re-export commonly used types
pub use emr::EmrClient;
pub use error::{ClientError, Result};
pub use glue::GlueClient;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Content type of the AWS JSON 1.1 protocol
const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header naming the operation to invoke
const AMZ_TARGET_HEADER: &str = "X-Amz-Target";

/// Transport shared by the service clients
///
/// Knows the endpoint and the service's target prefix (`AWSGlue`,
/// `ElasticMapReduce`); each call names the operation.
#[derive(Debug, Clone)]
pub(crate) struct ServiceClient {
    /// Base URL of the service endpoint
    base_url: String,
    /// Prefix of the `X-Amz-Target` header
    target_prefix: &'static str,
    /// HTTP client instance
    client: Client,
}

impl ServiceClient {
    pub(crate) fn new(base_url: impl Into<String>, target_prefix: &'static str, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            target_prefix,
            client,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `X-Amz-Target` header for `operation`
    fn target(&self, operation: &str) -> String {
        format!("{}.{}", self.target_prefix, operation)
    }

    /// Invoke `operation` with `request` as body and decode the response
    pub(crate) async fn call<Req, Resp>(&self, operation: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/", self.base_url);
        let body = serde_json::to_vec(request)
            .map_err(|e| ClientError::ParseError(format!("Failed to encode request: {}", e)))?;

        tracing::debug!(target_op = %self.target(operation), "calling service");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE)
            .header(AMZ_TARGET_HEADER, self.target(operation))
            .body(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle a service response and deserialize JSON
    ///
    /// Non-success statuses are turned into [`ClientError::ServiceError`]
    /// using the AWS error body when there is one.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_error_body(status.as_u16(), &error_text));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
