use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// An open GET response: the advertised content length and the body.
pub struct HttpResponse<E> {
    /// Value of the Content-Length header, if the server sent one.
    pub content_length: Option<u64>,

    /// The response body as a stream of chunks. Chunk sizes are the
    /// transport's choice, typically in the 8-32 KiB band.
    pub body: BoxStream<'static, std::result::Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed for fetching: one
/// streaming GET. Implementations handle their own redirect following,
/// timeout configuration, and error mapping.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open a streaming GET and return the response.
    ///
    /// The content length is read from the same response; no separate
    /// metadata request is made, so servers that omit the header yield
    /// `content_length: None` and an unknown total.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (DNS failure, connection
    /// error, timeout, HTTP error status).
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use reqwest::header::{CONNECTION, HeaderMap, HeaderValue};

    use super::*;
    use crate::data::Timeouts;
    use crate::error::{FetchError, Result};

    /// Production HTTP client backed by `reqwest`.
    ///
    /// Connections are pooled with keep-alive, gzip and deflate
    /// transfer encodings are negotiated and decoded transparently, and
    /// connect/read deadlines default to 10 seconds each.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a client with the default timeouts.
        pub fn new() -> Result<Self> {
            Self::with_timeouts(Timeouts::default())
        }

        /// Create a client with explicit connect/read deadlines.
        pub fn with_timeouts(timeouts: Timeouts) -> Result<Self> {
            let mut headers = HeaderMap::new();
            headers.insert(CONNECTION, HeaderValue::from_static("Keep-Alive"));
            headers.insert("charset", HeaderValue::from_static("UTF-8"));

            let client = reqwest::Client::builder()
                .default_headers(headers)
                .connect_timeout(timeouts.connect)
                .read_timeout(timeouts.read)
                .build()
                .map_err(|e| FetchError::Connect(Box::new(e)))?;

            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?.error_for_status()?;
            let content_length = response.content_length();
            let body: BoxStream<'static, _> = Box::pin(response.bytes_stream());

            Ok(HttpResponse {
                content_length,
                body,
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
