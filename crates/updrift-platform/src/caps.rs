//! Capability level of the host platform.
//!
//! Named flags replace scattered OS checks: they are resolved once at
//! startup and passed to whoever needs them, so routing logic never
//! inspects the OS itself.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// The platform can start an install flow from a notification after
    /// the host has been backgrounded.
    pub deferred_launch: bool,

    /// Artifacts under legacy shared storage must be made
    /// world-readable before an external installer can open them.
    pub world_readable_artifacts: bool,
}

static CURRENT: Lazy<PlatformCapabilities> = Lazy::new(PlatformCapabilities::detect);

impl PlatformCapabilities {
    /// Capabilities of the running host, resolved once and cached for
    /// the process lifetime.
    pub fn current() -> Self {
        *CURRENT
    }

    /// Explicit capability levels, for hosts that know better and for
    /// tests.
    pub const fn new(deferred_launch: bool, world_readable_artifacts: bool) -> Self {
        Self {
            deferred_launch,
            world_readable_artifacts,
        }
    }

    fn detect() -> Self {
        // Deferred launch needs a notification surface to hand the
        // prompt to. Windows and macOS always have one; elsewhere a
        // graphical session is the signal.
        #[cfg(any(target_os = "windows", target_os = "macos"))]
        let deferred_launch = true;
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let deferred_launch = std::env::var_os("DISPLAY").is_some()
            || std::env::var_os("WAYLAND_DISPLAY").is_some();

        // Storage collaborators for legacy shared mounts opt in via
        // `new`; per-user storage never needs broadening.
        Self {
            deferred_launch,
            world_readable_artifacts: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_stable_across_calls() {
        assert_eq!(PlatformCapabilities::current(), PlatformCapabilities::current());
    }

    #[test]
    fn explicit_levels_are_kept_verbatim() {
        let caps = PlatformCapabilities::new(false, true);
        assert!(!caps.deferred_launch);
        assert!(caps.world_readable_artifacts);
    }
}
