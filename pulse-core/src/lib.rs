//! Pulse Core
//!
//! Core types for the Pulse Glue/EMR activity report.
//!
//! This crate contains:
//! - Domain types: the normalized records that make up a report (JobRun, Cluster, Report)
//! - DTOs: wire shapes of the Glue and EMR JSON APIs
//! - Time: serde helpers for the two timestamp encodings in play

pub mod domain;
pub mod dto;
pub mod time;
