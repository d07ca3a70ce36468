//! Install handoff routing for completed download artifacts.
//!
//! Given a completed artifact and two live capability answers, exactly
//! one handoff strategy fires: launch the install flow now, raise the
//! host's window and then launch, or defer to a notification the user
//! triggers later.

mod decision;
mod error;
mod router;
mod traits;

pub use decision::{HandoffDecision, decide};
pub use error::HandoffError;
pub use router::HandoffRouter;
pub use traits::{CollaboratorError, CompletionNotifier, ForegroundProbe, InstallLauncher};
