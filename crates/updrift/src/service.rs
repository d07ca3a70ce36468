use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use updrift_fetch::{
    CancelToken, DownloadRequest, FetchOptions, Fetcher, HttpClient, IconRef, ProgressSink,
};
use updrift_handoff::{
    CompletionNotifier, ForegroundProbe, HandoffDecision, HandoffRouter, InstallLauncher,
};
use updrift_platform::caps::PlatformCapabilities;
use updrift_platform::perms;

use crate::error::DeliveryError;

/// Host application identity attached to delivered artifacts, shown by
/// notification and install surfaces.
#[derive(Debug, Clone)]
pub struct HostIdentity {
    pub display_name: String,
    pub icon: IconRef,
}

/// One-at-a-time update delivery: fetch, precondition, handoff.
///
/// The whole flow runs on the calling task; an internal lock keeps a
/// single fetch in flight, so concurrent callers queue rather than
/// download in parallel. Progress sinks are invoked synchronously from
/// the fetch; UI marshaling is the consumer's concern.
pub struct DeliveryService<C: HttpClient, P, L, N> {
    fetcher: Fetcher<C>,
    router: HandoffRouter<P, L, N>,
    caps: PlatformCapabilities,
    identity: HostIdentity,
    destination_dir: PathBuf,
    worker: Mutex<()>,
}

impl<C, P, L, N> DeliveryService<C, P, L, N>
where
    C: HttpClient,
    P: ForegroundProbe,
    L: InstallLauncher,
    N: CompletionNotifier,
{
    pub fn new(
        client: C,
        probe: P,
        launcher: L,
        notifier: N,
        caps: PlatformCapabilities,
        identity: HostIdentity,
        destination_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher: Fetcher::new(client),
            router: HandoffRouter::new(probe, launcher, notifier, caps.deferred_launch),
            caps,
            identity,
            destination_dir: destination_dir.into(),
            worker: Mutex::new(()),
        }
    }

    /// Download from `source_url` and hand the artifact off.
    ///
    /// Returns the handoff decision taken. The foreground state is
    /// queried when the artifact completes, not when the download
    /// starts.
    pub async fn deliver(
        &self,
        source_url: &str,
        sink: Option<Arc<dyn ProgressSink>>,
        cancel: Option<CancelToken>,
    ) -> Result<HandoffDecision, DeliveryError> {
        let _worker = self.worker.lock().await;

        let request = DownloadRequest::new(source_url, &self.destination_dir);
        let mut options = FetchOptions::default()
            .display_name(&self.identity.display_name)
            .icon(self.identity.icon);
        if let Some(sink) = sink {
            options = options.on_progress(sink);
        }
        if let Some(cancel) = cancel {
            options = options.cancel(cancel);
        }

        let artifact = self.fetcher.fetch(&request, options).await?;
        perms::ensure_world_readable(&artifact.file_path, &self.caps)?;
        let decision = self.router.route(&artifact)?;

        info!(%decision, artifact = %artifact.file_path.display(), "artifact delivered");
        Ok(decision)
    }
}
