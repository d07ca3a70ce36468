use tracing::{debug, warn};
use updrift_fetch::CompletedArtifact;

use crate::decision::{HandoffDecision, decide};
use crate::error::HandoffError;
use crate::traits::{CompletionNotifier, ForegroundProbe, InstallLauncher};

/// Routes a completed artifact to exactly one handoff strategy.
///
/// The deferred-launch capability is fixed at construction; the
/// foreground answer is queried live on every route, so an app
/// backgrounded mid-download is routed on its state at completion time.
pub struct HandoffRouter<P, L, N> {
    probe: P,
    launcher: L,
    notifier: N,
    deferred_launch: bool,
}

impl<P, L, N> HandoffRouter<P, L, N>
where
    P: ForegroundProbe,
    L: InstallLauncher,
    N: CompletionNotifier,
{
    pub fn new(probe: P, launcher: L, notifier: N, deferred_launch: bool) -> Self {
        Self {
            probe,
            launcher,
            notifier,
            deferred_launch,
        }
    }

    /// Evaluate the decision table once and fire the matching action.
    ///
    /// `bring_to_front` failures are swallowed: the subsequent launch
    /// attempt is the authoritative outcome. Launch and notify failures
    /// propagate as [`HandoffError`].
    pub fn route(&self, artifact: &CompletedArtifact) -> Result<HandoffDecision, HandoffError> {
        let decision = decide(self.probe.is_foreground(), self.deferred_launch);
        debug!(%decision, artifact = %artifact.file_path.display(), "routing completed artifact");

        match decision {
            HandoffDecision::LaunchNow => {
                self.launcher
                    .launch(artifact)
                    .map_err(HandoffError::LaunchFailed)?;
            }
            HandoffDecision::RaiseAndLaunch => {
                if let Err(err) = self.probe.bring_to_front() {
                    warn!(%err, "bring-to-front failed, launching anyway");
                }
                self.launcher
                    .launch(artifact)
                    .map_err(HandoffError::LaunchFailed)?;
            }
            HandoffDecision::DeferToNotification => {
                self.notifier
                    .notify(artifact)
                    .map_err(HandoffError::NotifyFailed)?;
            }
        }

        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use updrift_fetch::IconRef;

    use super::*;
    use crate::traits::CollaboratorError;

    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    struct FakeProbe {
        foreground: bool,
        raise_fails: bool,
        calls: CallLog,
    }

    impl ForegroundProbe for FakeProbe {
        fn is_foreground(&self) -> bool {
            self.foreground
        }

        fn bring_to_front(&self) -> Result<(), CollaboratorError> {
            self.calls.lock().unwrap().push("bring_to_front");
            if self.raise_fails {
                Err("window server unavailable".into())
            } else {
                Ok(())
            }
        }
    }

    struct FakeLauncher {
        fails: bool,
        calls: CallLog,
    }

    impl InstallLauncher for FakeLauncher {
        fn launch(&self, _artifact: &CompletedArtifact) -> Result<(), CollaboratorError> {
            self.calls.lock().unwrap().push("launch");
            if self.fails {
                Err("install intent rejected".into())
            } else {
                Ok(())
            }
        }
    }

    struct FakeNotifier {
        fails: bool,
        calls: CallLog,
    }

    impl CompletionNotifier for FakeNotifier {
        fn notify(&self, _artifact: &CompletedArtifact) -> Result<(), CollaboratorError> {
            self.calls.lock().unwrap().push("notify");
            if self.fails {
                Err("notification channel closed".into())
            } else {
                Ok(())
            }
        }
    }

    fn artifact() -> CompletedArtifact {
        CompletedArtifact {
            file_path: PathBuf::from("/tmp/app.apk"),
            display_name: "App".to_string(),
            icon: IconRef::default(),
        }
    }

    fn router(
        foreground: bool,
        deferred_launch: bool,
        raise_fails: bool,
        launch_fails: bool,
        notify_fails: bool,
    ) -> (HandoffRouter<FakeProbe, FakeLauncher, FakeNotifier>, CallLog) {
        let calls: CallLog = Arc::default();
        let router = HandoffRouter::new(
            FakeProbe {
                foreground,
                raise_fails,
                calls: calls.clone(),
            },
            FakeLauncher {
                fails: launch_fails,
                calls: calls.clone(),
            },
            FakeNotifier {
                fails: notify_fails,
                calls: calls.clone(),
            },
            deferred_launch,
        );
        (router, calls)
    }

    #[test]
    fn foreground_launches_and_touches_nothing_else() {
        let (router, calls) = router(true, true, false, false, false);
        let decision = router.route(&artifact()).unwrap();
        assert_eq!(decision, HandoffDecision::LaunchNow);
        assert_eq!(*calls.lock().unwrap(), vec!["launch"]);
    }

    #[test]
    fn background_without_deferred_raises_before_launching() {
        let (router, calls) = router(false, false, false, false, false);
        let decision = router.route(&artifact()).unwrap();
        assert_eq!(decision, HandoffDecision::RaiseAndLaunch);
        assert_eq!(*calls.lock().unwrap(), vec!["bring_to_front", "launch"]);
    }

    #[test]
    fn raise_failure_still_launches() {
        let (router, calls) = router(false, false, true, false, false);
        let decision = router.route(&artifact()).unwrap();
        assert_eq!(decision, HandoffDecision::RaiseAndLaunch);
        assert_eq!(*calls.lock().unwrap(), vec!["bring_to_front", "launch"]);
    }

    #[test]
    fn background_with_deferred_notifies_and_never_launches() {
        let (router, calls) = router(false, true, false, false, false);
        let decision = router.route(&artifact()).unwrap();
        assert_eq!(decision, HandoffDecision::DeferToNotification);
        assert_eq!(*calls.lock().unwrap(), vec!["notify"]);
    }

    #[test]
    fn launch_failure_propagates() {
        let (router, _) = router(true, false, false, true, false);
        let err = router.route(&artifact()).unwrap_err();
        assert!(matches!(err, HandoffError::LaunchFailed(_)));
    }

    #[test]
    fn notify_failure_propagates() {
        let (router, _) = router(false, true, false, false, true);
        let err = router.route(&artifact()).unwrap_err();
        assert!(matches!(err, HandoffError::NotifyFailed(_)));
    }

    #[test]
    fn same_answers_route_the_same_way_twice() {
        let (router, calls) = router(false, true, false, false, false);
        let first = router.route(&artifact()).unwrap();
        let second = router.route(&artifact()).unwrap();
        assert_eq!(first, second);
        assert_eq!(*calls.lock().unwrap(), vec!["notify", "notify"]);
    }
}
