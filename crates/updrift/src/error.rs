use thiserror::Error;

use updrift_fetch::FetchError;
use updrift_handoff::HandoffError;

/// Anything that can end a delivery early. Terminal for the current
/// invocation; the caller decides whether to start another.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Handoff(#[from] HandoffError),

    #[error(transparent)]
    Storage(#[from] updrift_platform::Error),
}
