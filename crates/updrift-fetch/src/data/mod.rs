//! Immutable configuration and types for fetch operations.

mod artifact;
mod options;
mod progress;
mod request;

pub use artifact::{CompletedArtifact, IconRef};
pub use options::{CancelToken, FetchOptions, Timeouts};
pub use progress::{DownloadProgress, ProgressSink};
pub use request::DownloadRequest;
