//! Collector configuration
//!
//! Where the two services live, which clusters get their own top-level
//! report field, and how far back job runs are reported.

use chrono::TimeDelta;
use pulse_core::domain::report::is_reserved_field;
use std::collections::BTreeSet;

/// Default lookback window for job runs, in hours
pub const DEFAULT_LOOKBACK_HOURS: u32 = 24;

/// Longest accepted lookback window, in hours (ten years)
pub const MAX_LOOKBACK_HOURS: u32 = 87_600;

/// Collector configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region, used to derive the default endpoints
    pub region: String,

    /// Glue endpoint base URL
    pub glue_endpoint: String,

    /// EMR endpoint base URL
    pub emr_endpoint: String,

    /// Cluster names reported as their own top-level fields
    pub named_clusters: BTreeSet<String>,

    /// Only runs started within this many hours are reported
    pub lookback_hours: u32,
}

impl Config {
    /// Creates a configuration for `region` with the public service endpoints
    pub fn new(region: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            glue_endpoint: default_glue_endpoint(&region),
            emr_endpoint: default_emr_endpoint(&region),
            region,
            named_clusters: BTreeSet::new(),
            lookback_hours: DEFAULT_LOOKBACK_HOURS,
        }
    }

    /// Adds a named cluster; adding the same name twice has no effect
    pub fn with_named_cluster(mut self, name: impl Into<String>) -> Self {
        self.named_clusters.insert(name.into());
        self
    }

    /// The lookback window as a duration
    pub fn lookback(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.lookback_hours))
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.region.is_empty() {
            anyhow::bail!("region cannot be empty");
        }

        for (label, endpoint) in [
            ("glue_endpoint", &self.glue_endpoint),
            ("emr_endpoint", &self.emr_endpoint),
        ] {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", label);
            }
        }

        if self.lookback_hours == 0 {
            anyhow::bail!("lookback_hours must be greater than 0");
        }
        if self.lookback_hours > MAX_LOOKBACK_HOURS {
            anyhow::bail!("lookback_hours must be at most {}", MAX_LOOKBACK_HOURS);
        }

        for name in &self.named_clusters {
            if name.trim().is_empty() {
                anyhow::bail!("named cluster names cannot be empty");
            }
            if is_reserved_field(name) {
                anyhow::bail!("'{}' is reserved and cannot be used as a named cluster", name);
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("us-east-1")
    }
}

/// Public Glue endpoint of `region`
pub fn default_glue_endpoint(region: &str) -> String {
    format!("https://glue.{}.amazonaws.com", region)
}

/// Public EMR endpoint of `region`
pub fn default_emr_endpoint(region: &str) -> String {
    format!("https://elasticmapreduce.{}.amazonaws.com", region)
}
