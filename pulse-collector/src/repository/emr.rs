//! EMR repository
//!
//! Handles communication with EMR:
//! - Enumerating clusters by lifecycle state
//! - Fetching full cluster detail

use async_trait::async_trait;
use pulse_client::EmrClient;
use pulse_core::domain::cluster::ClusterState;
use pulse_core::dto::emr::ClusterDetail;

use super::pagination::collect_pages;
use crate::error::UpstreamError;

/// Repository trait for EMR cluster lookups
#[async_trait]
pub trait EmrRepository: Send + Sync {
    /// Lists the ids of all clusters in any of `states`, in service order
    async fn list_cluster_ids(&self, states: &[ClusterState])
    -> Result<Vec<String>, UpstreamError>;

    /// Fetches the full detail of one cluster
    async fn describe_cluster(&self, cluster_id: &str) -> Result<ClusterDetail, UpstreamError>;
}

/// HTTP implementation of EmrRepository
pub struct HttpEmrRepository {
    client: EmrClient,
}

impl HttpEmrRepository {
    /// Creates a new HTTP EMR repository
    pub fn new(client: EmrClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmrRepository for HttpEmrRepository {
    async fn list_cluster_ids(
        &self,
        states: &[ClusterState],
    ) -> Result<Vec<String>, UpstreamError> {
        collect_pages("EMR", "ListClusters", |marker| async move {
            let page = self
                .client
                .list_clusters(states, marker)
                .await
                .map_err(UpstreamError::emr("ListClusters"))?;

            let ids = page.clusters.into_iter().map(|cluster| cluster.id).collect();
            Ok((ids, page.marker))
        })
        .await
    }

    async fn describe_cluster(&self, cluster_id: &str) -> Result<ClusterDetail, UpstreamError> {
        let response = self
            .client
            .describe_cluster(cluster_id)
            .await
            .map_err(UpstreamError::emr("DescribeCluster"))?;

        Ok(response.cluster)
    }
}
