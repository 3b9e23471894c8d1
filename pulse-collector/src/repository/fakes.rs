//! In-memory repositories for tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pulse_client::ClientError;
use pulse_core::domain::cluster::ClusterState;
use pulse_core::dto::emr::ClusterDetail;
use pulse_core::dto::glue::{JobRunDetail, JobRunSummary};
use std::collections::HashMap;
use std::sync::Mutex;

use super::{EmrRepository, GlueRepository};
use crate::error::UpstreamError;

/// Glue stand-in holding jobs, their runs and run details
#[derive(Default)]
pub struct FakeGlue {
    jobs: Vec<(String, Vec<JobRunSummary>)>,
    details: HashMap<(String, String), JobRunDetail>,
    failing_detail_job: Option<String>,
    fail_listing: bool,
    detail_calls: Mutex<Vec<(String, String)>>,
}

impl FakeGlue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a job with no runs
    pub fn with_job(mut self, job_name: &str) -> Self {
        self.jobs.push((job_name.to_string(), Vec::new()));
        self
    }

    /// Add a run to `job_name` (creating the job if needed) and its detail
    ///
    /// The detail carries `started_on` plus whatever `detail` already has.
    pub fn with_run(
        mut self,
        job_name: &str,
        run_id: &str,
        started_on: Option<DateTime<Utc>>,
        detail: JobRunDetail,
    ) -> Self {
        let summary = JobRunSummary {
            id: run_id.to_string(),
            started_on,
        };
        match self.jobs.iter_mut().find(|(name, _)| name == job_name) {
            Some((_, runs)) => runs.push(summary),
            None => self.jobs.push((job_name.to_string(), vec![summary])),
        }

        let detail = JobRunDetail {
            id: Some(run_id.to_string()),
            job_name: Some(job_name.to_string()),
            started_on: detail.started_on.or(started_on),
            ..detail
        };
        self.details
            .insert((job_name.to_string(), run_id.to_string()), detail);
        self
    }

    /// Make every detail fetch for `job_name` fail
    pub fn failing_detail_for(mut self, job_name: &str) -> Self {
        self.failing_detail_job = Some(job_name.to_string());
        self
    }

    /// Make job enumeration fail
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// (job, run) pairs whose detail was requested, in call order
    pub fn detail_calls(&self) -> Vec<(String, String)> {
        self.detail_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GlueRepository for FakeGlue {
    async fn list_job_names(&self) -> Result<Vec<String>, UpstreamError> {
        if self.fail_listing {
            return Err(UpstreamError::glue("GetJobs")(ClientError::service_error(
                400,
                "AccessDeniedException",
                "not authorized to perform glue:GetJobs",
            )));
        }
        Ok(self.jobs.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn list_job_runs(&self, job_name: &str) -> Result<Vec<JobRunSummary>, UpstreamError> {
        Ok(self
            .jobs
            .iter()
            .find(|(name, _)| name == job_name)
            .map(|(_, runs)| runs.clone())
            .unwrap_or_default())
    }

    async fn get_job_run(
        &self,
        job_name: &str,
        run_id: &str,
    ) -> Result<JobRunDetail, UpstreamError> {
        self.detail_calls
            .lock()
            .unwrap()
            .push((job_name.to_string(), run_id.to_string()));

        if self.failing_detail_job.as_deref() == Some(job_name) {
            return Err(UpstreamError::glue("GetJobRun")(ClientError::service_error(
                400,
                "ThrottlingException",
                "Rate exceeded",
            )));
        }

        self.details
            .get(&(job_name.to_string(), run_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                UpstreamError::glue("GetJobRun")(ClientError::service_error(
                    400,
                    "EntityNotFoundException",
                    format!("Job run {} not found", run_id),
                ))
            })
    }
}

/// EMR stand-in holding clusters with their states and details
#[derive(Default)]
pub struct FakeEmr {
    clusters: Vec<(String, ClusterState, ClusterDetail)>,
    fail_describe: bool,
    listed_states: Mutex<Vec<ClusterState>>,
}

impl FakeEmr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, id: &str, state: ClusterState, detail: ClusterDetail) -> Self {
        self.clusters.push((id.to_string(), state, detail));
        self
    }

    pub fn failing_describe(mut self) -> Self {
        self.fail_describe = true;
        self
    }

    /// States passed to the last enumeration
    pub fn listed_states(&self) -> Vec<ClusterState> {
        self.listed_states.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmrRepository for FakeEmr {
    async fn list_cluster_ids(
        &self,
        states: &[ClusterState],
    ) -> Result<Vec<String>, UpstreamError> {
        *self.listed_states.lock().unwrap() = states.to_vec();

        Ok(self
            .clusters
            .iter()
            .filter(|(_, state, _)| states.contains(state))
            .map(|(id, _, _)| id.clone())
            .collect())
    }

    async fn describe_cluster(&self, cluster_id: &str) -> Result<ClusterDetail, UpstreamError> {
        if self.fail_describe {
            return Err(UpstreamError::emr("DescribeCluster")(
                ClientError::service_error(500, "InternalServerError", "service unavailable"),
            ));
        }

        self.clusters
            .iter()
            .find(|(id, _, _)| id == cluster_id)
            .map(|(_, _, detail)| detail.clone())
            .ok_or_else(|| {
                UpstreamError::emr("DescribeCluster")(ClientError::service_error(
                    400,
                    "InvalidRequestException",
                    format!("Cluster id '{}' is not valid.", cluster_id),
                ))
            })
    }
}
