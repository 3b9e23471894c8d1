//! EMR API operations

use pulse_core::domain::cluster::ClusterState;
use pulse_core::dto::emr::{
    DescribeClusterRequest, DescribeClusterResponse, ListClustersRequest, ListClustersResponse,
};
use reqwest::Client;

use crate::ServiceClient;
use crate::error::Result;

/// Client for the EMR JSON API
#[derive(Debug, Clone)]
pub struct EmrClient {
    inner: ServiceClient,
}

impl EmrClient {
    const TARGET_PREFIX: &'static str = "ElasticMapReduce";

    /// Create a new EMR client
    ///
    /// # Arguments
    /// * `base_url` - The EMR endpoint (e.g., "https://elasticmapreduce.us-east-1.amazonaws.com")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new EMR client with a custom HTTP client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            inner: ServiceClient::new(base_url, Self::TARGET_PREFIX, client),
        }
    }

    /// Get the endpoint this client talks to
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Fetch one page of clusters in any of `states`
    ///
    /// # Arguments
    /// * `states` - Lifecycle states to filter on
    /// * `marker` - Pagination marker from the previous page, `None` for the first page
    pub async fn list_clusters(
        &self,
        states: &[ClusterState],
        marker: Option<String>,
    ) -> Result<ListClustersResponse> {
        self.inner
            .call(
                "ListClusters",
                &ListClustersRequest {
                    cluster_states: states.to_vec(),
                    marker,
                },
            )
            .await
    }

    /// Fetch the full detail of one cluster
    pub async fn describe_cluster(&self, cluster_id: &str) -> Result<DescribeClusterResponse> {
        self.inner
            .call(
                "DescribeCluster",
                &DescribeClusterRequest {
                    cluster_id: cluster_id.to_string(),
                },
            )
            .await
    }
}
