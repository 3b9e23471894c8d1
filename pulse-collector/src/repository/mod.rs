//! Repository layer
//!
//! Repositories hide the upstream services behind small, focused traits.
//! The HTTP implementations follow pagination to exhaustion so callers only
//! ever see complete result sets, and map every client failure into an
//! [`UpstreamError`](crate::error::UpstreamError).
//!
//! All repositories are trait-based to enable testing and mocking.

mod emr;
mod glue;
mod pagination;

#[cfg(test)]
pub mod fakes;
#[cfg(test)]
pub mod stub;

// Re-export traits
pub use emr::EmrRepository;
pub use glue::GlueRepository;

// Re-export implementations
pub use emr::HttpEmrRepository;
pub use glue::HttpGlueRepository;
