/// Error types for the recommendation engine
use thiserror::Error;

/// Failures returned by the core operations. None of them are retried; each is
/// a deterministic function of the catalog and the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The request itself is unusable (empty name list, zero count)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing in the catalog matched the request
    #[error("{0}")]
    NotFound(String),

    /// A catalog record lacks a field the operation depends on
    #[error("Site '{site}' is missing required field '{field}'")]
    DataIntegrity {
        site: String,
        field: &'static str,
    },
}
