//! Error types for value-set retrieval.

use thiserror::Error;

/// Errors raised while fetching a value set.
///
/// These never escape [`ValueSetSource::fetch_valueset`](crate::ValueSetSource);
/// they are logged there and turned into "not found".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TerminologyError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed before a response was received.
    #[error("request to {uri} failed: {source}")]
    Network {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("{uri} returned HTTP {status}")]
    Status { uri: String, status: u16 },

    /// Response body is not a JSON value set.
    #[error("invalid value set JSON from {uri}: {source}")]
    Decode {
        uri: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for terminology operations.
pub type Result<T> = std::result::Result<T, TerminologyError>;
