use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::artifact::IconRef;
use super::progress::ProgressSink;

/// Connect and read deadlines applied to the HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Deadline for establishing the connection.
    pub connect: Duration,

    /// Deadline for each read from the response body.
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            read: Duration::from_secs(10),
        }
    }
}

/// Cooperative cancellation handle, checked at each chunk boundary.
///
/// Cloning shares the flag; cancelling any clone stops the fetch at the
/// next chunk. The partial file is left in place.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration for a single fetch.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use updrift_fetch::FetchOptions;
///
/// let options = FetchOptions::default()
///     .display_name("My App")
///     .on_progress(Arc::new(|progress: &updrift_fetch::DownloadProgress| {
///         println!("{}%", progress.percent);
///     }));
/// ```
#[derive(Clone, Default)]
pub struct FetchOptions {
    /// Display name attached to the completed artifact. Falls back to
    /// the derived file name when unset.
    pub display_name: Option<String>,

    /// Icon attached to the completed artifact.
    pub icon: IconRef,

    /// Progress sink invoked on distinct percent values and terminal
    /// failure. Owned by the caller; the fetcher holds no global state.
    ///
    /// Default: None
    pub sink: Option<Arc<dyn ProgressSink>>,

    /// Cancellation handle checked at each chunk boundary.
    ///
    /// Default: None (the fetch runs to completion or failure)
    pub cancel: Option<CancelToken>,
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("display_name", &self.display_name)
            .field("icon", &self.icon)
            .field("sink", &self.sink.as_ref().map(|_| "{ ... }"))
            .field("cancel", &self.cancel)
            .finish()
    }
}

impl FetchOptions {
    /// Set the artifact display name.
    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the artifact icon.
    #[must_use]
    pub fn icon(mut self, icon: IconRef) -> Self {
        self.icon = icon;
        self
    }

    /// Set the progress sink.
    #[must_use]
    pub fn on_progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the cancellation handle.
    #[must_use]
    pub fn cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_token_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn default_timeouts_are_ten_seconds() {
        let timeouts = Timeouts::default();
        assert_eq!(timeouts.connect, Duration::from_secs(10));
        assert_eq!(timeouts.read, Duration::from_secs(10));
    }
}
