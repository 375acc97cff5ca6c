//! Domain availability prober.
//!
//! Two stages per TLD: an RDAP lookup through the politeness layer, then,
//! only if RDAP is inconclusive, an address lookup. Results are cached with
//! the domain TTL.

use crate::concurrent::{gather_ordered, Classification, ProbeInfrastructure, ProbeOutcome};
use crate::error::BrandScoutError;
use crate::protocols::dns::{DnsLookup, DnsOutcome};
use crate::protocols::http::{HttpFetch, HttpRequest};
use crate::protocols::registry::{rdap_url, select_tlds};
use crate::types::{Availability, CheckConfig, ProbeResult, ProbeSource, ProbeTarget};
use crate::utils::{domain_label, normalize_tld};
use tracing::debug;

/// Confidence of a conclusive RDAP answer.
const RDAP_CONFIDENCE: f64 = 0.95;
/// Confidence of a DNS answer; a registered domain can lack records.
const DNS_CONFIDENCE: f64 = 0.8;

/// Probes one name across the supported TLDs.
pub struct DomainProber<'a, H, D> {
    infra: &'a ProbeInfrastructure,
    http: &'a H,
    dns: &'a D,
    config: &'a CheckConfig,
}

impl<'a, H: HttpFetch, D: DnsLookup> DomainProber<'a, H, D> {
    pub fn new(
        infra: &'a ProbeInfrastructure,
        http: &'a H,
        dns: &'a D,
        config: &'a CheckConfig,
    ) -> Self {
        Self {
            infra,
            http,
            dns,
            config,
        }
    }

    /// Check one `name` + `tld` pair.
    ///
    /// Never fails: inconclusive or failed lookups come back as `unknown`
    /// with source `fallback`.
    ///
    /// # Arguments
    ///
    /// * `name` - Candidate name; reduced to `[a-z0-9-]`
    /// * `tld` - TLD with or without leading dot
    pub async fn check_domain(&self, name: &str, tld: &str) -> ProbeResult {
        let label = domain_label(name);
        let tld = normalize_tld(tld);
        let target = ProbeTarget::domain(label.clone(), &tld);

        if !label.chars().any(|c| c.is_ascii_alphanumeric()) {
            debug!(name, tld = %tld, "no usable domain label");
            return ProbeResult::new(target, Availability::Unknown, ProbeSource::Fallback, 0.0);
        }

        self.infra
            .cached_probe(target, self.config.domain_ttl, ProbeSource::Fallback, || {
                self.probe(&label, &tld)
            })
            .await
    }

    /// Check `name` under every selected TLD concurrently.
    ///
    /// Results come back in TLD table order regardless of completion order,
    /// one per selected TLD.
    pub async fn check_all_domains(&self, name: &str, filter: Option<&[String]>) -> Vec<ProbeResult> {
        let tlds = select_tlds(filter);
        gather_ordered(tlds.into_iter().map(|info| self.check_domain(name, info.tld))).await
    }

    async fn probe(&self, label: &str, tld: &str) -> ProbeOutcome {
        let domain = format!("{}{}", label, tld);

        match self.rdap_lookup(label, tld).await {
            Ok(classification) => return ProbeOutcome::Success(classification),
            Err(e) => debug!(domain = %domain, error = %e, "RDAP inconclusive, trying DNS"),
        }

        let lookup = tokio::time::timeout(self.config.dns_timeout, self.dns.resolve(&domain)).await;
        match lookup {
            Ok(DnsOutcome::Resolved) => ProbeOutcome::Success(Classification::new(
                Availability::Taken,
                ProbeSource::Dns,
                DNS_CONFIDENCE,
            )),
            Ok(DnsOutcome::NotFound) => ProbeOutcome::Success(Classification::new(
                Availability::Available,
                ProbeSource::Dns,
                DNS_CONFIDENCE,
            )),
            Ok(DnsOutcome::Failed(reason)) => {
                ProbeOutcome::NetworkFailure(BrandScoutError::dns(domain, reason))
            }
            Err(_) => ProbeOutcome::NetworkFailure(BrandScoutError::timeout(
                format!("DNS lookup {}", domain),
                self.config.dns_timeout,
            )),
        }
    }

    /// 404 means available, 2xx taken; anything else is an error so the
    /// caller falls through to DNS.
    async fn rdap_lookup(&self, label: &str, tld: &str) -> Result<Classification, BrandScoutError> {
        let request = HttpRequest::get(rdap_url(label, tld));
        let response = self
            .infra
            .polite_fetch(self.http, &request, self.config.rdap_timeout, "RDAP lookup")
            .await?;

        match response.status {
            404 => Ok(Classification::new(
                Availability::Available,
                ProbeSource::Rdap,
                RDAP_CONFIDENCE,
            )),
            _ if response.is_success() => Ok(Classification::new(
                Availability::Taken,
                ProbeSource::Rdap,
                RDAP_CONFIDENCE,
            )),
            status => Err(BrandScoutError::rdap_with_status(
                format!("{}{}", label, tld),
                "Inconclusive RDAP response",
                status,
            )),
        }
    }
}
