//! Report domain types
//!
//! The merged output document of one invocation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cluster::Cluster;
use super::job_run::JobRun;

/// Top-level key holding the Glue job runs
pub const JOB_RUNS_FIELD: &str = "glueJobRunData";

/// Top-level key holding the EMR clusters
pub const CLUSTERS_FIELD: &str = "emrClusterData";

/// Names that can't be used for named clusters because the report already
/// uses them as top-level keys
pub const RESERVED_FIELDS: [&str; 2] = [JOB_RUNS_FIELD, CLUSTERS_FIELD];

/// Whether `name` collides with one of the report's own top-level keys
pub fn is_reserved_field(name: &str) -> bool {
    RESERVED_FIELDS.contains(&name)
}

/// Merged report document
///
/// Serializes as one JSON object: the two collections under their fixed keys,
/// followed by one key per configured cluster name holding the matched
/// cluster or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "glueJobRunData")]
    pub job_runs: Vec<JobRun>,

    #[serde(rename = "emrClusterData")]
    pub clusters: Vec<Cluster>,

    #[serde(flatten)]
    pub named_clusters: NamedClusterLookup,
}

impl Report {
    /// Serialize the report into a response body
    pub fn to_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Configured cluster names mapped to the cluster carrying that name, if any
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedClusterLookup(BTreeMap<String, Option<Cluster>>);

impl NamedClusterLookup {
    /// Create a lookup tracking `names`, all initially unresolved
    ///
    /// Reserved field names are never tracked, so a report can't carry the
    /// same key twice.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !is_reserved_field(name))
                .map(|name| (name, None))
                .collect(),
        )
    }

    /// Whether `name` is one of the tracked names
    pub fn tracks(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Bind a tracked name to a cluster, replacing any earlier binding
    ///
    /// Returns `false` and leaves the lookup untouched when `name` is not
    /// tracked.
    pub fn bind(&mut self, name: &str, cluster: Cluster) -> bool {
        match self.0.get_mut(name) {
            Some(slot) => {
                *slot = Some(cluster);
                true
            }
            None => false,
        }
    }

    /// The cluster bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<&Cluster> {
        self.0.get(name).and_then(Option::as_ref)
    }

    /// Number of tracked names
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tracked names that resolved to a cluster
    pub fn resolved_count(&self) -> usize {
        self.0.values().filter(|cluster| cluster.is_some()).count()
    }
}
