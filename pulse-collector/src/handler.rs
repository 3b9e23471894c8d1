//! Invocation handler
//!
//! The single entry point of the job. One invocation takes one snapshot of
//! `now`, collects Glue runs and EMR clusters, resolves the named clusters
//! and answers with a status code and a JSON body. Any upstream failure turns
//! the whole invocation into a 500 carrying only `{"error": "<message>"}`.

use chrono::{DateTime, TimeDelta, Utc};
use pulse_core::domain::cluster::ClusterState;
use pulse_core::domain::report::Report;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::error::ReportError;
use crate::repository::{EmrRepository, GlueRepository};
use crate::service::{ClusterCollector, JobRunCollector, assemble, resolve_named_clusters};

/// Status code and body returned to the invoker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    /// Error envelope: status 500 and `{"error": message}`
    pub fn error(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self {
            status_code: 500,
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

/// Execution context handed over by the invoker
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Identifies this invocation in logs
    pub invocation_id: Uuid,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the activity report
pub struct ReportHandler {
    job_runs: JobRunCollector,
    clusters: ClusterCollector,
    named_clusters: BTreeSet<String>,
    lookback: TimeDelta,
}

impl ReportHandler {
    /// Creates a new handler
    ///
    /// # Arguments
    /// * `glue` - Source of job runs
    /// * `emr` - Source of clusters
    /// * `named_clusters` - Cluster names reported as their own top-level fields
    /// * `lookback` - How far back a run may have started to be reported
    pub fn new(
        glue: Arc<dyn GlueRepository>,
        emr: Arc<dyn EmrRepository>,
        named_clusters: BTreeSet<String>,
        lookback: TimeDelta,
    ) -> Self {
        Self {
            job_runs: JobRunCollector::new(glue),
            clusters: ClusterCollector::new(emr),
            named_clusters,
            lookback,
        }
    }

    /// Handles one invocation
    ///
    /// The trigger payload is accepted for interface compatibility and not
    /// inspected.
    pub async fn handle(
        &self,
        _event: &serde_json::Value,
        context: &InvocationContext,
    ) -> InvocationResponse {
        let span = info_span!("invocation", id = %context.invocation_id);
        self.handle_at(Utc::now()).instrument(span).await
    }

    /// Handles one invocation as of `now`
    pub async fn handle_at(&self, now: DateTime<Utc>) -> InvocationResponse {
        let report = match self.build_report(now).await {
            Ok(report) => report,
            Err(e) => {
                error!("Report failed: {}", e);
                return InvocationResponse::error(e.to_string());
            }
        };

        match report.to_body() {
            Ok(body) => {
                info!(
                    "Report ready: {} job runs, {} clusters, {}/{} named clusters resolved",
                    report.job_runs.len(),
                    report.clusters.len(),
                    report.named_clusters.resolved_count(),
                    report.named_clusters.len()
                );
                InvocationResponse::ok(body)
            }
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                InvocationResponse::error(e.to_string())
            }
        }
    }

    /// Runs the whole pipeline; the first upstream error aborts it
    pub async fn build_report(&self, now: DateTime<Utc>) -> Result<Report, ReportError> {
        let cutoff = now
            .checked_sub_signed(self.lookback)
            .ok_or(ReportError::WindowOutOfRange {
                hours: self.lookback.num_hours(),
            })?;

        let job_runs = self.job_runs.collect(cutoff).await?;
        let clusters = self.clusters.collect(&ClusterState::LIVE).await?;
        let named = resolve_named_clusters(&self.named_clusters, &clusters);

        Ok(assemble(job_runs, clusters, named))
    }
}
