//! Core domain types
//!
//! The normalized records a report is built from. Every record is transient:
//! constructed from upstream responses during one invocation, owned by the
//! report, and dropped once the report is serialized.

pub mod cluster;
pub mod job_run;
pub mod report;
