//! Blocking HTTP page source.

use crate::error::{FetchError, Result};
use crate::source::{PageSource, USER_AGENT};
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches pages over HTTP(S) with a blocking `reqwest` client.
///
/// Transport failures, error statuses and undecodable bodies are logged and
/// reported as a missing page.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Creates a source with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend cannot be set up.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::from)?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &Url) -> Option<String> {
        debug!(%url, "fetching page");

        let response = match self.client.get(url.clone()).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "target site is unreachable");
                return None;
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, status = ?e.status(), "target site is unreachable");
                return None;
            }
        };

        match response.text() {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(%url, error = %e, "failed to read page body");
                None
            }
        }
    }
}
