//! Data Transfer Objects for the upstream services
//!
//! Request and response bodies of the Glue and EMR JSON APIs. Field names
//! follow the services' PascalCase wire names; every field a service may omit
//! is an `Option` (or defaults to empty for lists) so that absence survives
//! until the collectors decide what it means.

pub mod emr;
pub mod glue;
