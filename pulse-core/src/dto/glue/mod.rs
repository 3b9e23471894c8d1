//! Glue DTOs
//!
//! Bodies of the `GetJobs`, `GetJobRuns` and `GetJobRun` operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::job_run::JobRunState;

/// Request for one page of `GetJobs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of `GetJobs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobsResponse {
    #[serde(default)]
    pub jobs: Vec<JobSummary>,
    pub next_token: Option<String>,
}

/// A job definition; only the name is used
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobSummary {
    pub name: String,
}

/// Request for one page of `GetJobRuns`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunsRequest {
    pub job_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of `GetJobRuns`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunsResponse {
    #[serde(default)]
    pub job_runs: Vec<JobRunSummary>,
    pub next_token: Option<String>,
}

/// A run as listed by `GetJobRuns`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobRunSummary {
    pub id: String,
    #[serde(default, with = "crate::time::epoch_seconds")]
    pub started_on: Option<DateTime<Utc>>,
}

/// Request for `GetJobRun`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunRequest {
    pub job_name: String,
    pub run_id: String,
}

/// Response of `GetJobRun`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunResponse {
    pub job_run: JobRunDetail,
}

/// Full detail of a job run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobRunDetail {
    pub id: Option<String>,
    pub job_name: Option<String>,
    pub job_run_state: Option<JobRunState>,
    #[serde(default, with = "crate::time::epoch_seconds")]
    pub started_on: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::time::epoch_seconds")]
    pub completed_on: Option<DateTime<Utc>>,
    pub execution_time: Option<i64>,
    pub arguments: Option<BTreeMap<String, String>>,
    pub error_message: Option<String>,
    pub glue_version: Option<String>,
    pub worker_type: Option<String>,
    pub number_of_workers: Option<i64>,
    pub timeout: Option<i64>,
}
