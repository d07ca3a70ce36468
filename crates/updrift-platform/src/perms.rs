//! Explicit precondition for installers that read from legacy storage.

use std::path::Path;

use crate::caps::PlatformCapabilities;
use crate::error::Result;

/// Broaden the artifact's mode so an external installer can read it.
///
/// No-op unless the platform reports `world_readable_artifacts`; on
/// targets without unix permissions there is nothing to broaden.
pub fn ensure_world_readable(path: &Path, caps: &PlatformCapabilities) -> Result<()> {
    if !caps.world_readable_artifacts {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o444);
        std::fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}
