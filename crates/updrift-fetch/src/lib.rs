//! Streaming HTTP download with coalesced percent progress.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable requests, options, and progress types
//! - [`core`] - Pure transformations
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Single-Pass**: One GET connection; chunks go straight to disk
//! - **Coalesced Progress**: Sinks see each whole-number percent at most once
//! - **Mechanism-Only**: No retry policy; the caller decides what a failed
//!   fetch means

mod core;
mod data;
mod effects;
mod error;

pub use crate::core::artifact_file_name;
pub use data::{
    CancelToken, CompletedArtifact, DownloadProgress, DownloadRequest, FetchOptions, IconRef,
    ProgressSink, Timeouts,
};
pub use effects::{BoxStream, Fetcher, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
