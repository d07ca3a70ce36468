use std::path::{Path, PathBuf};

use crate::core::artifact_file_name;

/// A single download invocation: the source URL and the directory the
/// artifact lands in.
///
/// Requests are immutable; build a new one per delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    source_url: String,
    destination_dir: PathBuf,
}

impl DownloadRequest {
    pub fn new(source_url: impl Into<String>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            destination_dir: destination_dir.into(),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }

    /// On-disk name for the artifact, taken from the final path segment
    /// of the source URL.
    ///
    /// Returns `None` when the URL ends in a separator and therefore
    /// names no file.
    pub fn artifact_file_name(&self) -> Option<String> {
        artifact_file_name(&self.source_url)
    }

    /// Full path the artifact is written to.
    pub fn destination_path(&self) -> Option<PathBuf> {
        self.artifact_file_name()
            .map(|name| self.destination_dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_path_joins_dir_and_url_segment() {
        let request = DownloadRequest::new("https://host/releases/app-1.2.apk", "/tmp/downloads");
        assert_eq!(
            request.destination_path(),
            Some(PathBuf::from("/tmp/downloads/app-1.2.apk"))
        );
    }

    #[test]
    fn url_without_file_segment_yields_no_path() {
        let request = DownloadRequest::new("https://host/releases/", "/tmp/downloads");
        assert_eq!(request.artifact_file_name(), None);
        assert_eq!(request.destination_path(), None);
    }
}
