use crate::error::FetchError;

/// Snapshot of a download in flight.
///
/// Emitted transiently to the progress sink; nothing is persisted.
/// For a single download, `percent` is monotonically non-decreasing and
/// each distinct value is emitted at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    /// Bytes written to the destination file so far.
    pub bytes_read: u64,

    /// Total expected bytes, if known from the Content-Length header.
    ///
    /// `None` when the server omits the length (e.g. chunked transfer
    /// encoding); in that case `percent` stays 0 and completion is
    /// signaled by end of stream instead.
    pub total_bytes: Option<u64>,

    /// Whole-number completion percentage, 0-100.
    pub percent: u8,
}

/// Receives progress and terminal-failure events from a fetch.
///
/// Callbacks run synchronously on the fetch worker, never concurrently
/// with themselves. Consumers that render UI must marshal onto their
/// own context.
pub trait ProgressSink: Send + Sync {
    /// A new distinct percent value was reached.
    fn on_progress(&self, progress: &DownloadProgress);

    /// The fetch ended in an error (including cancellation). Fires at
    /// most once, after the last `on_progress`.
    fn on_failed(&self, _error: &FetchError) {}
}

impl<F> ProgressSink for F
where
    F: Fn(&DownloadProgress) + Send + Sync,
{
    fn on_progress(&self, progress: &DownloadProgress) {
        self(progress)
    }
}
