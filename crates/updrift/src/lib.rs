//! Update delivery: stream a package over HTTP to local storage with
//! coalesced progress, then hand the completed artifact off to the
//! platform's install mechanism.
//!
//! The flow is fetch → precondition → route. [`DeliveryService`] runs
//! one delivery at a time; progress reaches the caller through a
//! [`ProgressSink`], and the completed artifact is routed to exactly
//! one handoff strategy based on the host's live foreground state and
//! the platform capability level.

mod error;
mod service;

pub use error::DeliveryError;
pub use service::{DeliveryService, HostIdentity};

pub use updrift_fetch::{
    BoxStream, CancelToken, CompletedArtifact, DownloadProgress, DownloadRequest, FetchError,
    FetchOptions, Fetcher, HttpClient, HttpResponse, IconRef, ProgressSink, ReqwestClient,
    Timeouts,
};
pub use updrift_handoff::{
    CollaboratorError, CompletionNotifier, ForegroundProbe, HandoffDecision, HandoffError,
    HandoffRouter, InstallLauncher, decide,
};
pub use updrift_platform::caps::PlatformCapabilities;
pub use updrift_platform::dir::download_dir;
pub use updrift_platform::probe::SystemProbe;
