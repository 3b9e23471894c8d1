//! Cluster collector
//!
//! Lists the EMR clusters in the requested states and normalizes the detail
//! of each one. Fields EMR leaves out either stay `None` or, for the four
//! fields reports always fill, take the sentinel values from
//! [`pulse_core::domain::cluster`].

use pulse_core::domain::cluster::{
    Cluster, ClusterState, NO_SECURITY_CONFIGURATION, UNKNOWN_INSTANCE_COUNT,
    UNKNOWN_INSTANCE_TYPE, UNKNOWN_NAME,
};
use pulse_core::dto::emr::ClusterDetail;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::UpstreamError;
use crate::repository::EmrRepository;

/// Collects EMR clusters with their full detail
pub struct ClusterCollector {
    emr: Arc<dyn EmrRepository>,
}

impl ClusterCollector {
    pub fn new(emr: Arc<dyn EmrRepository>) -> Self {
        Self { emr }
    }

    /// Collects every cluster currently in one of `states`, in listing order
    pub async fn collect(&self, states: &[ClusterState]) -> Result<Vec<Cluster>, UpstreamError> {
        let cluster_ids = self.emr.list_cluster_ids(states).await?;
        info!("Found {} EMR clusters", cluster_ids.len());

        let mut clusters = Vec::with_capacity(cluster_ids.len());

        for cluster_id in &cluster_ids {
            debug!("Describing EMR cluster: {}", cluster_id);
            let detail = self.emr.describe_cluster(cluster_id).await?;
            clusters.push(to_cluster(cluster_id, detail));
        }

        info!("Total EMR clusters enriched: {}", clusters.len());
        Ok(clusters)
    }
}

/// Normalize a cluster detail into a report record
fn to_cluster(cluster_id: &str, detail: ClusterDetail) -> Cluster {
    let status = detail.status.unwrap_or_default();
    let created_on = status
        .timeline
        .and_then(|timeline| timeline.creation_date_time);

    // Later tags overwrite earlier ones with the same key
    let tags: BTreeMap<String, String> = detail
        .tags
        .into_iter()
        .map(|tag| (tag.key, tag.value))
        .collect();

    Cluster {
        cluster_id: cluster_id.to_string(),
        cluster_name: detail.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        status: status.state,
        created_on,
        normalized_instance_hours: detail.normalized_instance_hours,
        release_label: detail.release_label,
        instance_type: detail
            .instance_collection_type
            .unwrap_or_else(|| UNKNOWN_INSTANCE_TYPE.to_string()),
        log_uri: detail.log_uri,
        master_public_dns_name: detail.master_public_dns_name,
        instance_count: detail
            .instance_fleet_type
            .unwrap_or_else(|| UNKNOWN_INSTANCE_COUNT.to_string()),
        step_concurrency_level: detail.step_concurrency_level,
        termination_protected: detail.termination_protected,
        security_configuration: detail
            .security_configuration
            .unwrap_or_else(|| NO_SECURITY_CONFIGURATION.to_string()),
        applications: detail.applications.into_iter().map(|app| app.name).collect(),
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fakes::FakeEmr;
    use chrono::{TimeZone, Utc};
    use pulse_core::dto::emr::{Application, ClusterStatus, ClusterTimeline, Tag};

    fn running(name: &str) -> ClusterDetail {
        ClusterDetail {
            name: Some(name.to_string()),
            status: Some(ClusterStatus {
                state: Some(ClusterState::Running),
                timeline: Some(ClusterTimeline {
                    creation_date_time: Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()),
                    ready_date_time: None,
                }),
            }),
            ..Default::default()
        }
    }

    fn tag(key: &str, value: &str) -> Tag {
        Tag {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_collects_live_clusters_in_order() {
        let emr = Arc::new(
            FakeEmr::new()
                .with_cluster("j-1", ClusterState::Running, running("analytics"))
                .with_cluster("j-2", ClusterState::Terminated, running("old"))
                .with_cluster("j-3", ClusterState::Waiting, running("reporting")),
        );
        let collector = ClusterCollector::new(emr.clone());

        let clusters = collector.collect(&ClusterState::LIVE).await.unwrap();
        let ids: Vec<&str> = clusters.iter().map(|c| c.cluster_id.as_str()).collect();

        assert_eq!(ids, vec!["j-1", "j-3"]);
        assert_eq!(emr.listed_states(), ClusterState::LIVE.to_vec());
    }

    #[test]
    fn test_full_detail_mapping() {
        let detail = ClusterDetail {
            normalized_instance_hours: Some(96),
            release_label: Some("emr-7.1.0".to_string()),
            instance_collection_type: Some("INSTANCE_FLEET".to_string()),
            log_uri: Some("s3://logs/".to_string()),
            master_public_dns_name: Some("ip-10-0-0-1.ec2.internal".to_string()),
            instance_fleet_type: Some("MASTER".to_string()),
            step_concurrency_level: Some(4),
            termination_protected: Some(true),
            security_configuration: Some("kerberos".to_string()),
            applications: vec![
                Application {
                    name: "Spark".to_string(),
                    version: Some("3.5.0".to_string()),
                },
                Application {
                    name: "Livy".to_string(),
                    version: None,
                },
            ],
            tags: vec![tag("team", "data"), tag("env", "prod")],
            ..running("analytics")
        };

        let cluster = to_cluster("j-1", detail);

        assert_eq!(cluster.cluster_name, "analytics");
        assert_eq!(cluster.status, Some(ClusterState::Running));
        assert_eq!(
            cluster.created_on,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap())
        );
        assert_eq!(cluster.instance_type, "INSTANCE_FLEET");
        assert_eq!(cluster.instance_count, "MASTER");
        assert_eq!(cluster.security_configuration, "kerberos");
        assert_eq!(cluster.applications, vec!["Spark", "Livy"]);
        assert_eq!(cluster.tags.get("env").map(String::as_str), Some("prod"));
        assert_eq!(cluster.step_concurrency_level, Some(4));
        assert_eq!(cluster.termination_protected, Some(true));
    }

    #[test]
    fn test_no_tags_or_applications_gives_empty_collections() {
        let cluster = to_cluster("j-1", running("bare"));
        let value = serde_json::to_value(&cluster).unwrap();

        assert_eq!(value["applications"], serde_json::json!([]));
        assert_eq!(value["tags"], serde_json::json!({}));
        assert_eq!(value["createdOn"], "2024-05-01T08:30:00+00:00");
    }

    #[test]
    fn test_sentinel_defaults() {
        let cluster = to_cluster("j-1", ClusterDetail::default());

        assert_eq!(cluster.cluster_name, "Unknown");
        assert_eq!(cluster.instance_type, "UNKNOWN");
        assert_eq!(cluster.instance_count, "N/A");
        assert_eq!(cluster.security_configuration, "None");
        assert!(cluster.status.is_none());
        assert!(cluster.created_on.is_none());
        assert!(cluster.release_label.is_none());
        assert!(cluster.termination_protected.is_none());
    }

    #[test]
    fn test_duplicate_tag_keys_last_wins() {
        let detail = ClusterDetail {
            tags: vec![tag("owner", "alice"), tag("owner", "bob")],
            ..Default::default()
        };

        let cluster = to_cluster("j-1", detail);

        assert_eq!(cluster.tags.len(), 1);
        assert_eq!(cluster.tags["owner"], "bob");
    }

    #[tokio::test]
    async fn test_describe_failure_aborts_collection() {
        let emr = Arc::new(
            FakeEmr::new()
                .with_cluster("j-1", ClusterState::Running, running("analytics"))
                .failing_describe(),
        );
        let collector = ClusterCollector::new(emr);

        let err = collector.collect(&ClusterState::LIVE).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Emr { operation: "DescribeCluster", .. }));
    }
}
