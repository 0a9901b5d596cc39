/// Errors raised while provisioning the catalog from a file or a document store
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload was not a valid list of regions
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document store could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The document store answered with an error status or an unexpected shape
    #[error("Catalog API error: {0}")]
    Api(String),
}
