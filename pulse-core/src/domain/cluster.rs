//! EMR cluster domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display name used when EMR does not report one
pub const UNKNOWN_NAME: &str = "Unknown";

/// Instance collection type used when EMR does not report one
pub const UNKNOWN_INSTANCE_TYPE: &str = "UNKNOWN";

/// Instance fleet type used when EMR does not report one
pub const UNKNOWN_INSTANCE_COUNT: &str = "N/A";

/// Security configuration used when the cluster has none
pub const NO_SECURITY_CONFIGURATION: &str = "None";

/// A live EMR cluster, as it appears in the report
///
/// `cluster_name`, `instance_type`, `instance_count` and
/// `security_configuration` always carry a value: when EMR omits them they
/// hold the sentinel strings defined in this module, so consumers can tell
/// "not provided" apart from a real value without a null check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub cluster_id: String,
    pub cluster_name: String,
    pub status: Option<ClusterState>,
    #[serde(default, with = "crate::time::iso8601::option")]
    pub created_on: Option<DateTime<Utc>>,
    pub normalized_instance_hours: Option<i64>,
    pub release_label: Option<String>,
    pub instance_type: String,
    pub log_uri: Option<String>,
    pub master_public_dns_name: Option<String>,
    pub instance_count: String,
    pub step_concurrency_level: Option<i64>,
    pub termination_protected: Option<bool>,
    pub security_configuration: String,
    pub applications: Vec<String>,
    pub tags: BTreeMap<String, String>,
}

/// Lifecycle state of an EMR cluster
///
/// States this build does not know are kept verbatim in [`ClusterState::Other`]
/// and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClusterState {
    Starting,
    Bootstrapping,
    Running,
    Waiting,
    Terminating,
    Terminated,
    TerminatedWithErrors,
    Other(String),
}

impl ClusterState {
    /// States in which a cluster is considered live and reported on
    pub const LIVE: [ClusterState; 4] = [
        ClusterState::Starting,
        ClusterState::Bootstrapping,
        ClusterState::Running,
        ClusterState::Waiting,
    ];

    /// Wire name of the state
    pub fn as_str(&self) -> &str {
        match self {
            ClusterState::Starting => "STARTING",
            ClusterState::Bootstrapping => "BOOTSTRAPPING",
            ClusterState::Running => "RUNNING",
            ClusterState::Waiting => "WAITING",
            ClusterState::Terminating => "TERMINATING",
            ClusterState::Terminated => "TERMINATED",
            ClusterState::TerminatedWithErrors => "TERMINATED_WITH_ERRORS",
            ClusterState::Other(raw) => raw,
        }
    }
}

impl From<String> for ClusterState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "STARTING" => ClusterState::Starting,
            "BOOTSTRAPPING" => ClusterState::Bootstrapping,
            "RUNNING" => ClusterState::Running,
            "WAITING" => ClusterState::Waiting,
            "TERMINATING" => ClusterState::Terminating,
            "TERMINATED" => ClusterState::Terminated,
            "TERMINATED_WITH_ERRORS" => ClusterState::TerminatedWithErrors,
            _ => ClusterState::Other(raw),
        }
    }
}

impl From<ClusterState> for String {
    fn from(state: ClusterState) -> Self {
        match state {
            ClusterState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ClusterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
