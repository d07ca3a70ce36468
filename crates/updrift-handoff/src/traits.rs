//! Collaborator seams for the handoff router.
//!
//! Implementations live with the host platform; the router only needs
//! these narrow interfaces, which keeps the decision machine fully
//! testable with fakes.

use updrift_fetch::CompletedArtifact;

/// Boxed error carried across a collaborator seam.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Live view of the host application's window state.
pub trait ForegroundProbe: Send + Sync {
    /// Whether the host application currently owns the foreground.
    ///
    /// Queried at decision time; implementations must not cache an
    /// answer from download start, since the user may background the
    /// app mid-download.
    fn is_foreground(&self) -> bool;

    /// Best-effort raise of the host application's own task. A task
    /// that cannot be found is a no-op, not an error.
    fn bring_to_front(&self) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Dispatches the platform install flow for a completed artifact.
pub trait InstallLauncher: Send + Sync {
    fn launch(&self, artifact: &CompletedArtifact) -> Result<(), CollaboratorError>;
}

/// Schedules a user-interaction-triggered install for later.
pub trait CompletionNotifier: Send + Sync {
    fn notify(&self, artifact: &CompletedArtifact) -> Result<(), CollaboratorError>;
}
