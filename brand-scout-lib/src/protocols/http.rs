//! HTTP transport used by RDAP lookups and platform profile probes.
//!
//! Probers talk to the network through the [`HttpFetch`] trait so that a
//! fake transport can stand in during tests. [`ReqwestFetcher`] is the
//! production implementation.

use crate::error::BrandScoutError;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::redirect::Policy;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Browser User-Agent strings, rotated round-robin per request.
///
/// Several platforms answer non-browser clients with a generic landing page
/// that would classify as "taken".
const USER_AGENTS: [&str; 12] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36 Edg/122.0.0.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 OPR/110.0.0.0",
];

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// HTTP method of a probe request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// Status code is enough
    Head,
    /// Body inspection is needed
    Get,
}

/// An outbound probe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: ProbeMethod,
    pub url: String,
}

/// The parts of a response that classification looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Response body; empty for HEAD requests
    pub body: String,
}

impl HttpRequest {
    pub fn get<U: Into<String>>(url: U) -> Self {
        Self {
            method: ProbeMethod::Get,
            url: url.into(),
        }
    }

    pub fn head<U: Into<String>>(url: U) -> Self {
        Self {
            method: ProbeMethod::Head,
            url: url.into(),
        }
    }
}

impl HttpResponse {
    pub fn new<B: Into<String>>(status: u16, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations must not apply politeness or caching themselves; the
/// probers wrap every call with both.
pub trait HttpFetch: Send + Sync {
    /// Send `request` and return status plus body.
    ///
    /// # Errors
    ///
    /// Returns a network error for connection, TLS or body-read failures.
    /// Non-2xx statuses are not errors.
    fn fetch(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, BrandScoutError>> + Send;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestFetcher {
    client: reqwest::Client,
    next_agent: AtomicUsize,
}

impl ReqwestFetcher {
    /// Create a fetcher whose client-level timeout is `timeout`.
    ///
    /// Probers enforce their own, usually shorter, per-target deadline on
    /// top of this.
    ///
    /// # Errors
    ///
    /// Returns `BrandScoutError::NetworkError` if the TLS backend cannot be
    /// initialized.
    pub fn new(timeout: Duration) -> Result<Self, BrandScoutError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| {
                BrandScoutError::network_with_source("Failed to create HTTP client", e.to_string())
            })?;

        Ok(Self {
            client,
            next_agent: AtomicUsize::new(0),
        })
    }

    /// Next User-Agent in the rotation.
    fn user_agent(&self) -> &'static str {
        let index = self.next_agent.fetch_add(1, Ordering::Relaxed);
        USER_AGENTS[index % USER_AGENTS.len()]
    }
}

impl HttpFetch for ReqwestFetcher {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, BrandScoutError> {
        let builder = match request.method {
            ProbeMethod::Head => self.client.head(&request.url),
            ProbeMethod::Get => self.client.get(&request.url),
        };

        let response = builder
            .header(USER_AGENT, self.user_agent())
            .header(ACCEPT, "text/html,application/json;q=0.9,*/*;q=0.8")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = match request.method {
            ProbeMethod::Head => String::new(),
            ProbeMethod::Get => response.text().await?,
        };

        Ok(HttpResponse { status, body })
    }
}
