//! Service layer
//!
//! Services contain the report's business logic. The collectors drive the
//! repositories and normalize what they return; the resolver and the
//! assembler are pure functions over the collected records.

mod clusters;
mod job_runs;
mod report;
mod resolver;

pub use clusters::ClusterCollector;
pub use job_runs::JobRunCollector;
pub use report::assemble;
pub use resolver::resolve_named_clusters;
