//! Job run collector
//!
//! Walks every Glue job, keeps the runs that started after the cutoff and
//! fetches their full detail. Any failure aborts the whole collection.

use chrono::{DateTime, Utc};
use pulse_core::domain::job_run::JobRun;
use pulse_core::dto::glue::JobRunDetail;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::UpstreamError;
use crate::repository::GlueRepository;

/// Collects recent Glue job runs
pub struct JobRunCollector {
    glue: Arc<dyn GlueRepository>,
}

impl JobRunCollector {
    pub fn new(glue: Arc<dyn GlueRepository>) -> Self {
        Self { glue }
    }

    /// Collects every run started strictly after `cutoff`
    ///
    /// Runs come out in job enumeration order, then run enumeration order
    /// within each job.
    pub async fn collect(&self, cutoff: DateTime<Utc>) -> Result<Vec<JobRun>, UpstreamError> {
        let job_names = self.glue.list_job_names().await?;
        info!("Found {} Glue jobs", job_names.len());

        let mut runs = Vec::new();

        for job_name in &job_names {
            let summaries = self.glue.list_job_runs(job_name).await?;

            for summary in summaries
                .iter()
                .filter(|summary| started_after(summary.started_on, cutoff))
            {
                debug!(
                    "Getting detailed info for Glue run: {} / {}",
                    job_name, summary.id
                );
                let detail = self.glue.get_job_run(job_name, &summary.id).await?;
                runs.push(to_job_run(job_name, &summary.id, detail)?);
            }
        }

        info!("Total Glue job runs since {}: {}", cutoff, runs.len());
        Ok(runs)
    }
}

/// Whether a run with this start time belongs in the window
///
/// Runs without a start time never do.
pub fn started_after(started_on: Option<DateTime<Utc>>, cutoff: DateTime<Utc>) -> bool {
    matches!(started_on, Some(started_on) if started_on > cutoff)
}

/// Normalize a run detail into a report record
fn to_job_run(job_name: &str, run_id: &str, detail: JobRunDetail) -> Result<JobRun, UpstreamError> {
    let started_on = detail.started_on.ok_or_else(|| {
        UpstreamError::malformed(
            "Glue",
            "GetJobRun",
            format!("run {} of job {} has no StartedOn", run_id, job_name),
        )
    })?;

    Ok(JobRun {
        job_name: job_name.to_string(),
        run_id: run_id.to_string(),
        status: detail.job_run_state,
        started_on,
        completed_on: detail.completed_on,
        execution_time: detail.execution_time,
        arguments: detail.arguments,
        error_message: detail.error_message,
        glue_version: detail.glue_version,
        worker_type: detail.worker_type,
        number_of_workers: detail.number_of_workers,
        timeout: detail.timeout,
    })
}
