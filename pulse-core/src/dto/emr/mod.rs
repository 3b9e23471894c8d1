//! EMR DTOs
//!
//! Bodies of the `ListClusters` and `DescribeCluster` operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cluster::ClusterState;

/// Request for one page of `ListClusters`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListClustersRequest {
    pub cluster_states: Vec<ClusterState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// One page of `ListClusters`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListClustersResponse {
    #[serde(default)]
    pub clusters: Vec<ClusterSummary>,
    pub marker: Option<String>,
}

/// A cluster as listed by `ListClusters`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterSummary {
    pub id: String,
    pub name: Option<String>,
}

/// Request for `DescribeCluster`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeClusterRequest {
    pub cluster_id: String,
}

/// Response of `DescribeCluster`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeClusterResponse {
    pub cluster: ClusterDetail,
}

/// Full detail of a cluster
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterDetail {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<ClusterStatus>,
    pub normalized_instance_hours: Option<i64>,
    pub release_label: Option<String>,
    pub instance_collection_type: Option<String>,
    pub log_uri: Option<String>,
    pub master_public_dns_name: Option<String>,
    pub instance_fleet_type: Option<String>,
    pub step_concurrency_level: Option<i64>,
    pub termination_protected: Option<bool>,
    pub security_configuration: Option<String>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Cluster status block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterStatus {
    pub state: Option<ClusterState>,
    pub timeline: Option<ClusterTimeline>,
}

/// Cluster lifecycle timestamps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterTimeline {
    #[serde(default, with = "crate::time::epoch_seconds")]
    pub creation_date_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::time::epoch_seconds")]
    pub ready_date_time: Option<DateTime<Utc>>,
}

/// An application installed on a cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Application {
    pub name: String,
    pub version: Option<String>,
}

/// A cluster tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}
