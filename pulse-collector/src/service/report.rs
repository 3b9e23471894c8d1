//! Report assembly

use pulse_core::domain::cluster::Cluster;
use pulse_core::domain::job_run::JobRun;
use pulse_core::domain::report::{NamedClusterLookup, Report};

/// Merge the collected records and the named lookup into one report
pub fn assemble(job_runs: Vec<JobRun>, clusters: Vec<Cluster>, named: NamedClusterLookup) -> Report {
    Report {
        job_runs,
        clusters,
        named_clusters: named,
    }
}
