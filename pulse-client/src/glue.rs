//! Glue API operations

use pulse_core::dto::glue::{
    GetJobRunRequest, GetJobRunResponse, GetJobRunsRequest, GetJobRunsResponse, GetJobsRequest,
    GetJobsResponse,
};
use reqwest::Client;

use crate::ServiceClient;
use crate::error::Result;

/// Client for the Glue JSON API
#[derive(Debug, Clone)]
pub struct GlueClient {
    inner: ServiceClient,
}

impl GlueClient {
    const TARGET_PREFIX: &'static str = "AWSGlue";

    /// Create a new Glue client
    ///
    /// # Arguments
    /// * `base_url` - The Glue endpoint (e.g., "https://glue.us-east-1.amazonaws.com")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new Glue client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, default headers, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            inner: ServiceClient::new(base_url, Self::TARGET_PREFIX, client),
        }
    }

    /// Get the endpoint this client talks to
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Fetch one page of job definitions
    ///
    /// # Arguments
    /// * `next_token` - Continuation token from the previous page, `None` for the first page
    pub async fn get_jobs(&self, next_token: Option<String>) -> Result<GetJobsResponse> {
        self.inner
            .call("GetJobs", &GetJobsRequest { next_token })
            .await
    }

    /// Fetch one page of runs of a job
    ///
    /// # Arguments
    /// * `job_name` - The job whose runs are listed
    /// * `next_token` - Continuation token from the previous page, `None` for the first page
    pub async fn get_job_runs(
        &self,
        job_name: &str,
        next_token: Option<String>,
    ) -> Result<GetJobRunsResponse> {
        self.inner
            .call(
                "GetJobRuns",
                &GetJobRunsRequest {
                    job_name: job_name.to_string(),
                    next_token,
                },
            )
            .await
    }

    /// Fetch the full detail of one run
    pub async fn get_job_run(&self, job_name: &str, run_id: &str) -> Result<GetJobRunResponse> {
        self.inner
            .call(
                "GetJobRun",
                &GetJobRunRequest {
                    job_name: job_name.to_string(),
                    run_id: run_id.to_string(),
                },
            )
            .await
    }
}
