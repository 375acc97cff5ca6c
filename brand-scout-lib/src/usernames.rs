//! Username availability prober.
//!
//! One HTTP exchange per platform, classified by the platform's
//! [`Classifier`](crate::platforms::Classifier). Unprobeable platforms are
//! answered locally without touching the cache or the network.

use crate::concurrent::{gather_ordered, ProbeInfrastructure, ProbeOutcome};
use crate::platforms::{select_platforms, Platform};
use crate::protocols::http::{HttpFetch, HttpRequest};
use crate::types::{Availability, CheckConfig, ProbeResult, ProbeSource, ProbeTarget};
use crate::utils::username_handle;
use tracing::debug;

/// Probes one handle across the supported platforms.
pub struct UsernameProber<'a, H> {
    infra: &'a ProbeInfrastructure,
    http: &'a H,
    config: &'a CheckConfig,
}

impl<'a, H: HttpFetch> UsernameProber<'a, H> {
    pub fn new(infra: &'a ProbeInfrastructure, http: &'a H, config: &'a CheckConfig) -> Self {
        Self {
            infra,
            http,
            config,
        }
    }

    /// Check `username` on one platform.
    ///
    /// Network errors, timeouts and unreadable bodies are absorbed into
    /// `unknown` with confidence 0.2 and source `http`.
    pub async fn check_platform(&self, platform: &Platform, username: &str) -> ProbeResult {
        let handle = username_handle(username);
        let target = ProbeTarget::username(platform.name, handle.clone());

        if !platform.is_probeable() {
            debug!(platform = platform.name, "platform is never probed");
            return ProbeResult::new(target, Availability::Unknown, ProbeSource::Skipped, 0.0);
        }
        if handle.is_empty() {
            // An empty handle would hit the platform's front page
            debug!(platform = platform.name, username, "no usable handle");
            return ProbeResult::new(target, Availability::Unknown, ProbeSource::Skipped, 0.0);
        }

        self.infra
            .cached_probe(target, self.config.username_ttl, ProbeSource::Http, || {
                self.probe(platform, &handle)
            })
            .await
    }

    /// Check `username` on every selected platform concurrently, returning
    /// results in platform table order.
    pub async fn check_all_usernames(
        &self,
        username: &str,
        filter: Option<&[String]>,
    ) -> Vec<ProbeResult> {
        let platforms = select_platforms(filter);
        gather_ordered(
            platforms
                .into_iter()
                .map(|platform| self.check_platform(platform, username)),
        )
        .await
    }

    async fn probe(&self, platform: &Platform, handle: &str) -> ProbeOutcome {
        let request = HttpRequest {
            method: platform.method,
            url: platform.probe_url_for(handle),
        };

        match self
            .infra
            .polite_fetch(self.http, &request, self.config.http_timeout, "profile probe")
            .await
        {
            Ok(response) => {
                debug!(platform = platform.name, status = response.status, "profile response");
                ProbeOutcome::Success(platform.classifier.classify(&response))
            }
            Err(e) => ProbeOutcome::NetworkFailure(e),
        }
    }
}
