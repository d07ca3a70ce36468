//! Process-table-backed foreground probe.

use std::ffi::OsStr;

use sysinfo::{ProcessStatus, Signal, System};
use tracing::debug;
use updrift_handoff::{CollaboratorError, ForegroundProbe};

/// Cap on how many tasks the raise path inspects.
const TASK_SCAN_LIMIT: usize = 100;

/// Foreground probe that scans the live process set by name.
///
/// Every query takes a fresh snapshot; nothing is cached, so a host
/// backgrounded mid-download is seen as backgrounded at decision time.
pub struct SystemProbe {
    process_name: String,
}

impl SystemProbe {
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
        }
    }

    /// Probe for the current executable's own process name.
    pub fn for_current_process() -> Option<Self> {
        let exe = std::env::current_exe().ok()?;
        let name = exe.file_name()?.to_str()?.to_string();
        Some(Self::new(name))
    }

    fn snapshot(&self) -> System {
        let mut sys = System::new_all();
        sys.refresh_all();
        sys
    }
}

impl ForegroundProbe for SystemProbe {
    fn is_foreground(&self) -> bool {
        // The closest portable analog of "importance == foreground":
        // a live instance of the host that is actually running, not
        // sleeping in the background or stopped.
        self.snapshot()
            .processes_by_exact_name(OsStr::new(&self.process_name))
            .any(|process| process.status() == ProcessStatus::Run)
    }

    fn bring_to_front(&self) -> Result<(), CollaboratorError> {
        let sys = self.snapshot();
        let task = sys
            .processes()
            .values()
            .take(TASK_SCAN_LIMIT)
            .find(|process| process.name() == OsStr::new(&self.process_name));

        match task {
            Some(process) => {
                // Wake a stopped task; platforms without the signal
                // report None and the launch attempt decides the rest.
                let _ = process.kill_with(Signal::Continue);
                debug!(name = %self.process_name, pid = %process.pid(), "raised host task");
                Ok(())
            }
            None => {
                debug!(name = %self.process_name, "host task not found, skipping raise");
                Ok(())
            }
        }
    }
}
