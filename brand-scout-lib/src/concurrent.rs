//! Shared probing infrastructure and fan-out helpers.
//!
//! [`ProbeInfrastructure`] owns the two pieces of cross-request state, the
//! result cache and the politeness layer, and is handed to every prober
//! explicitly. Probe functions return a [`ProbeOutcome`]; the conversion
//! to a [`ProbeResult`] in [`ProbeOutcome::into_result`] is the one place
//! where failures become `unknown`.

use crate::cache::ResultCache;
use crate::error::BrandScoutError;
use crate::politeness::PolitenessLayer;
use crate::protocols::http::{HttpFetch, HttpRequest, HttpResponse};
use crate::types::{Availability, CheckConfig, ProbeResult, ProbeSource, ProbeTarget};
use crate::utils::host_of;
use futures::future::join_all;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Confidence attached to a probe that failed outright.
pub const FAILURE_CONFIDENCE: f64 = 0.2;

/// A decided classification, before it is bound to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub status: Availability,
    pub source: ProbeSource,
    pub confidence: f64,
}

impl Classification {
    pub fn new(status: Availability, source: ProbeSource, confidence: f64) -> Self {
        Self {
            status,
            source,
            confidence,
        }
    }
}

/// What a single probe produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The probe ran and classified the target (possibly as unknown)
    Success(Classification),
    /// The probe could not complete: timeout, connection error, bad body
    NetworkFailure(BrandScoutError),
}

impl ProbeOutcome {
    /// Bind this outcome to its target.
    ///
    /// A `NetworkFailure` becomes `unknown` with [`FAILURE_CONFIDENCE`],
    /// tagged with `failure_source`.
    pub fn into_result(self, target: ProbeTarget, failure_source: ProbeSource) -> ProbeResult {
        match self {
            ProbeOutcome::Success(c) => ProbeResult::new(target, c.status, c.source, c.confidence),
            ProbeOutcome::NetworkFailure(error) => {
                warn!(probe = %target.label(), %error, "probe failed, reporting unknown");
                ProbeResult::new(
                    target,
                    Availability::Unknown,
                    failure_source,
                    FAILURE_CONFIDENCE,
                )
            }
        }
    }
}

/// Cross-request probing state: result cache plus per-host politeness.
pub struct ProbeInfrastructure {
    cache: ResultCache,
    politeness: PolitenessLayer,
}

impl Default for ProbeInfrastructure {
    fn default() -> Self {
        Self::new(&CheckConfig::default())
    }
}

impl ProbeInfrastructure {
    /// Build fresh state from the politeness settings in `config`.
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            cache: ResultCache::new(),
            politeness: PolitenessLayer::new(
                config.max_per_host,
                config.min_spacing,
                config.max_spacing,
            ),
        }
    }

    /// Assemble from existing parts.
    pub fn from_parts(cache: ResultCache, politeness: PolitenessLayer) -> Self {
        Self { cache, politeness }
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn politeness(&self) -> &PolitenessLayer {
        &self.politeness
    }

    /// Return the cached result for `target`, or run `probe`, bind its
    /// outcome, and cache the result for `ttl`.
    ///
    /// Failed probes are cached too, so a target that just timed out is not
    /// hammered again within the TTL.
    pub async fn cached_probe<F, Fut>(
        &self,
        target: ProbeTarget,
        ttl: Duration,
        failure_source: ProbeSource,
        probe: F,
    ) -> ProbeResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ProbeOutcome>,
    {
        let key = target.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, status = %hit.status, "cache hit");
            return hit;
        }

        let result = probe().await.into_result(target, failure_source);
        debug!(key = %key, status = %result.status, source = %result.source, "probe finished");
        self.cache.set(&key, result.clone(), ttl);
        result
    }

    /// Send one request through the politeness layer under `timeout`.
    ///
    /// The deadline covers both waiting for a host slot and the exchange.
    ///
    /// # Errors
    ///
    /// Returns `BrandScoutError::Timeout` when the deadline passes, or the
    /// transport's error.
    pub async fn polite_fetch<H: HttpFetch>(
        &self,
        fetcher: &H,
        request: &HttpRequest,
        timeout: Duration,
        operation: &str,
    ) -> Result<HttpResponse, BrandScoutError> {
        let host = host_of(&request.url);
        let exchange = async {
            let permit = self.politeness.acquire(&host).await?;
            let response = fetcher.fetch(request).await;
            self.politeness.release(permit);
            response
        };

        match tokio::time::timeout(timeout, exchange).await {
            Ok(response) => response,
            Err(_) => Err(BrandScoutError::timeout(
                format!("{} {}", operation, request.url),
                timeout,
            )),
        }
    }
}

/// Run every future concurrently and return the outputs in input order.
///
/// All futures run to completion; one finishing early or producing a
/// failure value never cancels the others.
pub async fn gather_ordered<I>(futures: I) -> Vec<<I::Item as Future>::Output>
where
    I: IntoIterator,
    I::Item: Future,
{
    join_all(futures).await
}
