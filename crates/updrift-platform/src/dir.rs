//! Per-user storage resolution for downloaded artifacts.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

fn user_cache() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("LOCALAPPDATA").map(|p| PathBuf::from(p).join("Cache"))
    }
    #[cfg(target_os = "macos")]
    {
        home::home_dir().map(|p| p.join("Library/Caches"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|p| p.join(".cache")))
    }
}

/// Writable per-user directory for downloaded artifacts, created if
/// missing.
pub fn download_dir(app_name: &str) -> Result<PathBuf> {
    let dir = user_cache()
        .ok_or(Error::NoStorageDir)?
        .join(app_name)
        .join("downloads");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
