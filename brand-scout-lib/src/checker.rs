//! Main brand checker implementation.
//!
//! This module provides the primary `BrandChecker` struct that validates a
//! query, fans out domain and username probes concurrently, and assembles
//! the scored report.

use crate::analysis::{analyze_name, describe_for_ai, suggest_correction};
use crate::concurrent::ProbeInfrastructure;
use crate::domains::DomainProber;
use crate::error::BrandScoutError;
use crate::generate::generate_suggestions;
use crate::platforms::find_platform;
use crate::protocols::dns::{DnsLookup, HickoryDns};
use crate::protocols::http::{HttpFetch, ReqwestFetcher};
use crate::scoring::calculate_score;
use crate::types::{
    BrandReport, CheckConfig, CheckRequest, DomainEntry, ProbeResult, ProbeTarget, UsernameEntry,
};
use crate::usernames::UsernameProber;
use crate::utils::parse_query;
use std::time::Instant;
use tracing::{debug, info};

/// Main checker that coordinates availability probing for brand names.
///
/// The `BrandChecker` owns the cross-request state (result cache and
/// per-host politeness) so that reusing one checker across queries shares
/// both. Transports are type parameters; production code uses the defaults.
///
/// # Example
///
/// ```rust,no_run
/// use brand_scout_lib::{BrandChecker, CheckRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let checker = BrandChecker::new()?;
///     let report = checker
///         .check(&CheckRequest::new("getflowhub").with_tlds(["com", "io"]))
///         .await?;
///     println!("{} scored {}/100", report.name, report.score);
///     Ok(())
/// }
/// ```
pub struct BrandChecker<H = ReqwestFetcher, D = HickoryDns> {
    /// Configuration settings for this checker instance
    config: CheckConfig,
    /// Shared cache and politeness layer
    infra: ProbeInfrastructure,
    http: H,
    dns: D,
}

impl BrandChecker {
    /// Create a checker with default configuration and real transports.
    ///
    /// # Errors
    ///
    /// Returns a network error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, BrandScoutError> {
        Self::with_config(CheckConfig::default())
    }

    /// Create a checker with custom configuration and real transports.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use brand_scout_lib::{BrandChecker, CheckConfig};
    /// use std::time::Duration;
    ///
    /// let config = CheckConfig::default()
    ///     .with_http_timeout(Duration::from_secs(10))
    ///     .with_max_per_host(2);
    ///
    /// let checker = BrandChecker::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: CheckConfig) -> Result<Self, BrandScoutError> {
        let http = ReqwestFetcher::new(config.http_timeout.max(config.rdap_timeout))?;
        let dns = HickoryDns::new(config.dns_timeout);
        Ok(Self::with_transports(config, http, dns))
    }
}

impl<H: HttpFetch, D: DnsLookup> BrandChecker<H, D> {
    /// Create a checker over caller-supplied transports.
    pub fn with_transports(config: CheckConfig, http: H, dns: D) -> Self {
        let infra = ProbeInfrastructure::new(&config);
        Self {
            config,
            infra,
            http,
            dns,
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// The cache and politeness state shared by every probe.
    pub fn infrastructure(&self) -> &ProbeInfrastructure {
        &self.infra
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn dns(&self) -> &D {
        &self.dns
    }

    /// Build the full report for one request.
    ///
    /// The process:
    /// 1. Validates and normalizes the query (no probes on failure)
    /// 2. Probes domains and usernames concurrently, each batch fanning out
    ///    per TLD/platform
    /// 3. Scores, suggests and analyzes the results
    ///
    /// # Arguments
    ///
    /// * `request` - Query plus optional TLD/platform filters; filters given
    ///   here override the ones in the checker's configuration
    ///
    /// # Errors
    ///
    /// Only validation errors (empty or over-long query, nothing usable
    /// after normalization). Probe failures show up as `unknown` results.
    pub async fn check(&self, request: &CheckRequest) -> Result<BrandReport, BrandScoutError> {
        let candidate = parse_query(&request.query)?;
        let started = Instant::now();

        let tld_filter = request.tlds.as_deref().or(self.config.tlds.as_deref());
        let platform_filter = request
            .platforms
            .as_deref()
            .or(self.config.platforms.as_deref());

        debug!(
            query = %candidate.query,
            name = %candidate.name,
            interpretation = %candidate.interpretation,
            "probing"
        );

        let domain_prober = DomainProber::new(&self.infra, &self.http, &self.dns, &self.config);
        let username_prober = UsernameProber::new(&self.infra, &self.http, &self.config);
        let (domains, usernames) = tokio::join!(
            domain_prober.check_all_domains(&candidate.name, tld_filter),
            username_prober.check_all_usernames(&candidate.name, platform_filter),
        );

        let name = candidate.name;
        let score = calculate_score(&domains, &usernames, &name);
        let report = BrandReport {
            query: candidate.query,
            interpretation: candidate.interpretation,
            score,
            description_for_ai: describe_for_ai(&name, &domains, &usernames),
            suggestions: generate_suggestions(&name),
            did_you_mean: suggest_correction(&name),
            analysis: analyze_name(&name, &domains, &usernames),
            domains: domains.iter().filter_map(domain_entry).collect(),
            usernames: usernames.iter().filter_map(username_entry).collect(),
            name,
        };

        info!(
            name = %report.name,
            score = report.score,
            domains = report.domains.len(),
            usernames = report.usernames.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "report ready"
        );

        Ok(report)
    }

    /// Shorthand for [`check`](Self::check) without filters.
    pub async fn check_query(&self, query: &str) -> Result<BrandReport, BrandScoutError> {
        self.check(&CheckRequest::new(query)).await
    }

    /// Probe a single domain, through the same cache and politeness layer.
    pub async fn check_domain(&self, name: &str, tld: &str) -> ProbeResult {
        DomainProber::new(&self.infra, &self.http, &self.dns, &self.config)
            .check_domain(name, tld)
            .await
    }

    /// Probe a single handle on one platform.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` when `platform` is not a supported platform.
    pub async fn check_username(
        &self,
        platform: &str,
        username: &str,
    ) -> Result<ProbeResult, BrandScoutError> {
        let descriptor = find_platform(platform).ok_or_else(|| {
            BrandScoutError::invalid_query(platform, "Unknown platform")
        })?;
        Ok(UsernameProber::new(&self.infra, &self.http, &self.config)
            .check_platform(descriptor, username)
            .await)
    }
}

fn domain_entry(result: &ProbeResult) -> Option<DomainEntry> {
    match &result.target {
        ProbeTarget::Domain { tld, .. } => Some(DomainEntry {
            domain: result.target.label(),
            tld: tld.clone(),
            status: result.status,
            source: result.source,
        }),
        ProbeTarget::Username { .. } => None,
    }
}

fn username_entry(result: &ProbeResult) -> Option<UsernameEntry> {
    match &result.target {
        ProbeTarget::Username { platform, username } => Some(UsernameEntry {
            profile_url: find_platform(platform)
                .map(|p| p.profile_url_for(username))
                .unwrap_or_default(),
            platform: platform.clone(),
            username: username.clone(),
            status: result.status,
            confidence: result.confidence,
        }),
        ProbeTarget::Domain { .. } => None,
    }
}
