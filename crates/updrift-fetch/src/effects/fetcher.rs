use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

use crate::core::PercentGauge;
use crate::data::{CompletedArtifact, DownloadRequest, FetchOptions};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Streams one artifact from its source URL into the destination
/// directory, reporting coalesced percent progress along the way.
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Download the requested artifact.
    ///
    /// Progress events fire synchronously on the calling task, only
    /// when the whole-number percentage reaches a new value. On any
    /// failure the partial file is left in place, the sink's
    /// `on_failed` fires once, and the error is returned; there is no
    /// retry. The response stream and destination file are released on
    /// every exit path.
    pub async fn fetch(
        &self,
        request: &DownloadRequest,
        options: FetchOptions,
    ) -> Result<CompletedArtifact> {
        match self.run(request, &options).await {
            Ok(artifact) => Ok(artifact),
            Err(err) => {
                error!(url = request.source_url(), %err, "download failed");
                if let Some(sink) = &options.sink {
                    sink.on_failed(&err);
                }
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        request: &DownloadRequest,
        options: &FetchOptions,
    ) -> Result<CompletedArtifact> {
        let file_name = request
            .artifact_file_name()
            .ok_or_else(|| FetchError::InvalidRequest(request.source_url().to_string()))?;
        let destination = request.destination_dir().join(&file_name);

        let response = self
            .client
            .get(request.source_url())
            .await
            .map_err(|e| FetchError::Connect(Box::new(e)))?;
        let mut body = response.body;
        let mut gauge = PercentGauge::new(response.content_length);

        debug!(
            url = request.source_url(),
            total = ?response.content_length,
            path = %destination.display(),
            "download started"
        );

        let mut file = File::create(&destination).await.map_err(|e| FetchError::Stream {
            bytes_written: 0,
            source: Box::new(e),
        })?;

        while let Some(chunk) = body.next().await {
            if let Some(cancel) = &options.cancel {
                if cancel.is_cancelled() {
                    return Err(FetchError::Cancelled {
                        bytes_written: gauge.bytes_read(),
                    });
                }
            }

            let chunk = chunk.map_err(|e| FetchError::Stream {
                bytes_written: gauge.bytes_read(),
                source: Box::new(e),
            })?;
            file.write_all(&chunk).await.map_err(|e| FetchError::Stream {
                bytes_written: gauge.bytes_read(),
                source: Box::new(e),
            })?;

            if let Some(update) = gauge.advance(chunk.len() as u64) {
                if let Some(sink) = &options.sink {
                    sink.on_progress(&update);
                }
            }
        }

        file.flush().await.map_err(|e| FetchError::Stream {
            bytes_written: gauge.bytes_read(),
            source: Box::new(e),
        })?;

        debug!(
            bytes = gauge.bytes_read(),
            path = %destination.display(),
            "download complete"
        );

        Ok(CompletedArtifact {
            display_name: options.display_name.clone().unwrap_or(file_name),
            icon: options.icon,
            file_path: destination,
        })
    }
}
