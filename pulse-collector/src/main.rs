//! Pulse Collector
//!
//! One-shot job that reports on recent Glue job runs and live EMR clusters.
//!
//! Architecture:
//! - Configuration: command line arguments with environment fallbacks
//! - Repositories: Glue and EMR access, pagination followed to exhaustion
//! - Services: collectors, named cluster resolution, report assembly
//! - Handler: one invocation in, one status code and JSON body out
//!
//! The response envelope is printed to stdout; logs go to stderr. The
//! process exits non-zero when the envelope carries an error.

mod config;
mod error;
mod handler;
mod repository;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DEFAULT_LOOKBACK_HOURS};
use crate::handler::{InvocationContext, ReportHandler};
use crate::repository::{HttpEmrRepository, HttpGlueRepository};
use pulse_client::{EmrClient, GlueClient};

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Glue job run and EMR cluster activity report", long_about = None)]
struct Cli {
    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    region: String,

    /// Glue endpoint override (signing proxy or local emulator)
    #[arg(long, env = "PULSE_GLUE_ENDPOINT")]
    glue_endpoint: Option<String>,

    /// EMR endpoint override (signing proxy or local emulator)
    #[arg(long, env = "PULSE_EMR_ENDPOINT")]
    emr_endpoint: Option<String>,

    /// Cluster name to report as its own field (repeatable or comma separated)
    #[arg(
        long = "named-cluster",
        env = "PULSE_NAMED_CLUSTERS",
        value_delimiter = ','
    )]
    named_clusters: Vec<String>,

    /// Report job runs started within this many hours
    #[arg(long, env = "PULSE_LOOKBACK_HOURS", default_value_t = DEFAULT_LOOKBACK_HOURS)]
    lookback_hours: u32,

    /// JSON file holding the trigger payload
    #[arg(long)]
    event: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn to_config(&self) -> Config {
        let mut config = Config::new(self.region.clone());

        if let Some(endpoint) = &self.glue_endpoint {
            config.glue_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.emr_endpoint {
            config.emr_endpoint = endpoint.clone();
        }
        for name in &self.named_clusters {
            config = config.with_named_cluster(name.trim());
        }
        config.lookback_hours = self.lookback_hours;

        config
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse_collector=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = cli.to_config();
    config.validate().context("Invalid configuration")?;
    info!(
        "Loaded configuration: region={}, glue_endpoint={}, emr_endpoint={}, lookback={}h, named_clusters={:?}",
        config.region,
        config.glue_endpoint,
        config.emr_endpoint,
        config.lookback_hours,
        config.named_clusters
    );

    let event = load_event(cli.event.as_deref()).await?;

    let glue = Arc::new(HttpGlueRepository::new(GlueClient::new(
        config.glue_endpoint.clone(),
    )));
    let emr = Arc::new(HttpEmrRepository::new(EmrClient::new(
        config.emr_endpoint.clone(),
    )));

    let handler = ReportHandler::new(glue, emr, config.named_clusters.clone(), config.lookback());
    let response = handler.handle(&event, &InvocationContext::new()).await;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("Failed to render response")?;
    println!("{}", rendered);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Reads the trigger payload, `null` when none is given
async fn load_event(path: Option<&Path>) -> Result<serde_json::Value> {
    let Some(path) = path else {
        return Ok(serde_json::Value::Null);
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read event file {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Event file {} is not valid JSON", path.display()))
}
