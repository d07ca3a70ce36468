use std::fmt;

/// Strategy for handing a completed artifact to the platform's install
/// mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffDecision {
    /// The host owns the foreground: start the install flow directly.
    LaunchNow,

    /// The host is backgrounded and cannot rely on a deferred prompt:
    /// raise its own window first, then start the install flow.
    RaiseAndLaunch,

    /// The host is backgrounded and the platform can launch from a
    /// notification: schedule the install for user interaction instead
    /// of interrupting.
    DeferToNotification,
}

impl fmt::Display for HandoffDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffDecision::LaunchNow => write!(f, "LaunchNow"),
            HandoffDecision::RaiseAndLaunch => write!(f, "RaiseAndLaunch"),
            HandoffDecision::DeferToNotification => write!(f, "DeferToNotification"),
        }
    }
}

/// Select the handoff strategy from the two capability answers.
///
/// Pure and stateless: the same inputs always produce the same
/// decision.
pub const fn decide(is_foreground: bool, deferred_launch: bool) -> HandoffDecision {
    if is_foreground {
        HandoffDecision::LaunchNow
    } else if deferred_launch {
        HandoffDecision::DeferToNotification
    } else {
        HandoffDecision::RaiseAndLaunch
    }
}
