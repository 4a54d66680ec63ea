//! HTTP transport for the catalog client
//!
//! The fetcher performs exactly one GET per call and hands back the raw body.
//! It knows nothing about JSON; decoding belongs to the client.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::FetchError;

/// A source of raw response bodies keyed by absolute URL
///
/// [`HttpFetcher`] is the production implementation; tests substitute an
/// in-memory one to count and script requests.
pub trait Fetch: Send + Sync {
    /// Performs a single GET against `url` and returns the full body
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// [`Fetch`] implementation backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "Received response");
        if status.as_u16() >= 400 {
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! Scripted in-memory fetcher for unit tests

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::{Fetch, FetchError};

    /// Serves canned bodies or status codes and records every request
    #[derive(Debug, Default)]
    pub(crate) struct StubFetcher {
        responses: Mutex<HashMap<String, Result<Vec<u8>, u16>>>,
        requested: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Answers `url` with `body`
        pub(crate) fn respond(self, url: &str, body: &str) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url.to_string(), Ok(body.as_bytes().to_vec()));
            self
        }

        /// Answers `url` with an error status
        pub(crate) fn fail(self, url: &str, code: u16) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url.to_string(), Err(code));
            self
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().unwrap().push(url.to_string());

            match self.responses.lock().unwrap().get(url) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(code)) => Err(FetchError::HttpStatus { code: *code }),
                None => Err(FetchError::HttpStatus { code: 404 }),
            }
        }
    }
}
