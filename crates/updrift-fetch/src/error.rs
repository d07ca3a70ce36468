//! Error types for updrift-fetch.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Terminal fetch failures. One best-effort attempt per invocation; no
/// retry, and the partial file stays on disk.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("source URL names no artifact file: {0}")]
    InvalidRequest(String),

    #[error("connection failed: {0}")]
    Connect(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("transfer failed after {bytes_written} bytes: {source}")]
    Stream {
        bytes_written: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("fetch cancelled after {bytes_written} bytes")]
    Cancelled { bytes_written: u64 },
}
