//! Glue job run domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One execution of a Glue job, as it appears in the report
///
/// Optional fields stay `None` when Glue omits them and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRun {
    pub job_name: String,
    pub run_id: String,
    pub status: Option<JobRunState>,
    #[serde(with = "crate::time::iso8601")]
    pub started_on: DateTime<Utc>,
    #[serde(default, with = "crate::time::iso8601::option")]
    pub completed_on: Option<DateTime<Utc>>,
    /// Execution time in seconds
    pub execution_time: Option<i64>,
    pub arguments: Option<BTreeMap<String, String>>,
    pub error_message: Option<String>,
    pub glue_version: Option<String>,
    pub worker_type: Option<String>,
    pub number_of_workers: Option<i64>,
    /// Timeout in minutes
    pub timeout: Option<i64>,
}

/// Lifecycle state of a Glue job run
///
/// States this build does not know are kept verbatim in [`JobRunState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobRunState {
    Starting,
    Running,
    Stopping,
    Stopped,
    Succeeded,
    Failed,
    Timeout,
    Error,
    Waiting,
    Expired,
    Other(String),
}

impl JobRunState {
    /// Wire name of the state
    pub fn as_str(&self) -> &str {
        match self {
            JobRunState::Starting => "STARTING",
            JobRunState::Running => "RUNNING",
            JobRunState::Stopping => "STOPPING",
            JobRunState::Stopped => "STOPPED",
            JobRunState::Succeeded => "SUCCEEDED",
            JobRunState::Failed => "FAILED",
            JobRunState::Timeout => "TIMEOUT",
            JobRunState::Error => "ERROR",
            JobRunState::Waiting => "WAITING",
            JobRunState::Expired => "EXPIRED",
            JobRunState::Other(raw) => raw,
        }
    }
}

impl From<String> for JobRunState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "STARTING" => JobRunState::Starting,
            "RUNNING" => JobRunState::Running,
            "STOPPING" => JobRunState::Stopping,
            "STOPPED" => JobRunState::Stopped,
            "SUCCEEDED" => JobRunState::Succeeded,
            "FAILED" => JobRunState::Failed,
            "TIMEOUT" => JobRunState::Timeout,
            "ERROR" => JobRunState::Error,
            "WAITING" => JobRunState::Waiting,
            "EXPIRED" => JobRunState::Expired,
            _ => JobRunState::Other(raw),
        }
    }
}

impl From<JobRunState> for String {
    fn from(state: JobRunState) -> Self {
        match state {
            JobRunState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for JobRunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
