//! Glue repository
//!
//! Handles communication with Glue:
//! - Enumerating job names
//! - Enumerating the runs of a job
//! - Fetching full run detail

use async_trait::async_trait;
use pulse_client::GlueClient;
use pulse_core::dto::glue::{JobRunDetail, JobRunSummary};

use super::pagination::collect_pages;
use crate::error::UpstreamError;

/// Repository trait for Glue job and job run lookups
#[async_trait]
pub trait GlueRepository: Send + Sync {
    /// Lists the names of all jobs, in service order
    async fn list_job_names(&self) -> Result<Vec<String>, UpstreamError>;

    /// Lists every run of a job, in service order
    ///
    /// # Arguments
    /// * `job_name` - The job whose runs are listed
    async fn list_job_runs(&self, job_name: &str) -> Result<Vec<JobRunSummary>, UpstreamError>;

    /// Fetches the full detail of one run
    ///
    /// # Arguments
    /// * `job_name` - The job the run belongs to
    /// * `run_id` - The run identifier
    async fn get_job_run(&self, job_name: &str, run_id: &str)
    -> Result<JobRunDetail, UpstreamError>;
}

/// HTTP implementation of GlueRepository
pub struct HttpGlueRepository {
    client: GlueClient,
}

impl HttpGlueRepository {
    /// Creates a new HTTP Glue repository
    pub fn new(client: GlueClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GlueRepository for HttpGlueRepository {
    async fn list_job_names(&self) -> Result<Vec<String>, UpstreamError> {
        collect_pages("Glue", "GetJobs", |token| async move {
            let page = self
                .client
                .get_jobs(token)
                .await
                .map_err(UpstreamError::glue("GetJobs"))?;

            let names = page.jobs.into_iter().map(|job| job.name).collect();
            Ok((names, page.next_token))
        })
        .await
    }

    async fn list_job_runs(&self, job_name: &str) -> Result<Vec<JobRunSummary>, UpstreamError> {
        collect_pages("Glue", "GetJobRuns", |token| async move {
            let page = self
                .client
                .get_job_runs(job_name, token)
                .await
                .map_err(UpstreamError::glue("GetJobRuns"))?;

            Ok((page.job_runs, page.next_token))
        })
        .await
    }

    async fn get_job_run(
        &self,
        job_name: &str,
        run_id: &str,
    ) -> Result<JobRunDetail, UpstreamError> {
        let response = self
            .client
            .get_job_run(job_name, run_id)
            .await
            .map_err(UpstreamError::glue("GetJobRun"))?;

        Ok(response.job_run)
    }
}
