use thiserror::Error;

use crate::traits::CollaboratorError;

/// Terminal handoff failures. The artifact stays on disk either way;
/// there is no retry.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("install launch failed: {0}")]
    LaunchFailed(#[source] CollaboratorError),

    #[error("completion notification failed: {0}")]
    NotifyFailed(#[source] CollaboratorError),
}
