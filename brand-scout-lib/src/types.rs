//! Core data types for brand availability checking.
//!
//! This module defines the probe model (targets, results, statuses), the
//! request/configuration types, and the serialized report shape.

use crate::analysis::NameAnalysis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Availability classification of a single probe.
///
/// `Unknown` is a first-class outcome: it means the probe could not decide,
/// and the caller should surface it as needing manual verification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Taken,
    Unknown,
}

/// Which probing stage produced a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProbeSource {
    /// Registration-data lookup answered conclusively
    Rdap,
    /// RDAP was inconclusive, DNS resolution answered
    Dns,
    /// Both domain stages were inconclusive
    Fallback,
    /// HTTP profile probe (including absorbed failures)
    Http,
    /// Platform is never probed
    Skipped,
}

/// One thing to probe: a domain under a TLD, or a handle on a platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProbeTarget {
    Domain {
        /// Normalized label, e.g. "acme"
        name: String,
        /// TLD with leading dot, e.g. ".com"
        tld: String,
    },
    Username {
        /// Platform display name, e.g. "GitHub"
        platform: String,
        /// Normalized handle
        username: String,
    },
}

/// Result of probing a single target. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeResult {
    pub target: ProbeTarget,
    pub status: Availability,
    pub source: ProbeSource,
    /// How far the classification heuristic can be trusted, in [0, 1]
    pub confidence: f64,
}

/// How the raw query was read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    /// A bare brand name ("Acme Labs" -> "acmelabs")
    Name,
    /// A domain-like query ("acme.io" -> "acme")
    Domain,
}

/// The normalized brand candidate derived once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateName {
    /// Raw query as received
    pub query: String,
    /// Normalized name used for scoring and suggestions
    pub name: String,
    pub interpretation: Interpretation,
}

/// A single availability request, as handed over by a front end.
#[derive(Debug, Clone, Default)]
pub struct CheckRequest {
    /// Raw query, 1-63 characters
    pub query: String,
    /// Optional TLD subset filter ("com" or ".com")
    pub tlds: Option<Vec<String>>,
    /// Optional platform subset filter (case-insensitive names)
    pub platforms: Option<Vec<String>>,
}

/// Configuration options for probing.
///
/// The timeouts, politeness parameters and TTLs default to the values the
/// published report format was built around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Timeout for each registration-data lookup
    /// Default: 5 seconds
    #[serde(skip)]
    pub rdap_timeout: Duration,

    /// Timeout for each HTTP profile probe
    /// Default: 8 seconds
    #[serde(skip)]
    pub http_timeout: Duration,

    /// Timeout for the DNS fallback lookup
    /// Default: 5 seconds
    #[serde(skip)]
    pub dns_timeout: Duration,

    /// Maximum in-flight requests per remote host
    /// Default: 3
    pub max_per_host: usize,

    /// Lower bound of the randomized per-host spacing
    /// Default: 200ms
    #[serde(skip)]
    pub min_spacing: Duration,

    /// Upper bound of the randomized per-host spacing
    /// Default: 500ms
    #[serde(skip)]
    pub max_spacing: Duration,

    /// Cache lifetime of domain results
    /// Default: 5 minutes
    #[serde(skip)]
    pub domain_ttl: Duration,

    /// Cache lifetime of username results
    /// Default: 10 minutes
    #[serde(skip)]
    pub username_ttl: Duration,

    /// Default TLD filter applied when a request carries none
    pub tlds: Option<Vec<String>>,

    /// Default platform filter applied when a request carries none
    pub platforms: Option<Vec<String>>,
}

/// One domain row of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainEntry {
    pub domain: String,
    pub tld: String,
    pub status: Availability,
    pub source: ProbeSource,
}

/// One platform row of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsernameEntry {
    pub platform: String,
    pub username: String,
    pub status: Availability,
    pub profile_url: String,
    pub confidence: f64,
}

/// Full availability report for one query. Built fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandReport {
    pub query: String,
    /// Normalized candidate name
    pub name: String,
    pub interpretation: Interpretation,
    /// Composite score, 0-100
    pub score: u8,
    /// One-sentence summary for machine readers
    pub description_for_ai: String,
    pub domains: Vec<DomainEntry>,
    pub usernames: Vec<UsernameEntry>,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_you_mean: Option<String>,
    pub analysis: NameAnalysis,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            rdap_timeout: Duration::from_secs(5),
            http_timeout: Duration::from_secs(8),
            dns_timeout: Duration::from_secs(5),
            max_per_host: 3,
            min_spacing: Duration::from_millis(200),
            max_spacing: Duration::from_millis(500),
            domain_ttl: Duration::from_secs(5 * 60),
            username_ttl: Duration::from_secs(10 * 60),
            tlds: None,
            platforms: None,
        }
    }
}

impl CheckConfig {
    /// Set the registration-data lookup timeout.
    pub fn with_rdap_timeout(mut self, timeout: Duration) -> Self {
        self.rdap_timeout = timeout;
        self
    }

    /// Set the HTTP profile probe timeout.
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Set the DNS fallback timeout.
    pub fn with_dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    /// Set the per-host in-flight cap. Clamped to at least 1.
    pub fn with_max_per_host(mut self, max: usize) -> Self {
        self.max_per_host = max.max(1);
        self
    }

    /// Set the randomized spacing window between requests to one host.
    ///
    /// Bounds are swapped if given in the wrong order.
    pub fn with_spacing(mut self, min: Duration, max: Duration) -> Self {
        if min <= max {
            self.min_spacing = min;
            self.max_spacing = max;
        } else {
            self.min_spacing = max;
            self.max_spacing = min;
        }
        self
    }

    /// Set cache lifetimes for domain and username results.
    pub fn with_ttls(mut self, domain_ttl: Duration, username_ttl: Duration) -> Self {
        self.domain_ttl = domain_ttl;
        self.username_ttl = username_ttl;
        self
    }

    /// Set the default TLD filter.
    pub fn with_tlds(mut self, tlds: Vec<String>) -> Self {
        self.tlds = Some(tlds);
        self
    }

    /// Set the default platform filter.
    pub fn with_platforms(mut self, platforms: Vec<String>) -> Self {
        self.platforms = Some(platforms);
        self
    }
}

impl CheckRequest {
    /// Create a request for a raw query with no filters.
    pub fn new<Q: Into<String>>(query: Q) -> Self {
        Self {
            query: query.into(),
            tlds: None,
            platforms: None,
        }
    }

    /// Restrict the request to a subset of the configured TLDs.
    pub fn with_tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tlds = Some(tlds.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the request to a subset of the configured platforms.
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = Some(platforms.into_iter().map(Into::into).collect());
        self
    }
}

impl ProbeTarget {
    /// Build a domain target; the TLD may be given with or without its dot.
    pub fn domain<N: Into<String>>(name: N, tld: &str) -> Self {
        Self::Domain {
            name: name.into(),
            tld: crate::utils::normalize_tld(tld),
        }
    }

    /// Build a username target.
    pub fn username<P: Into<String>, U: Into<String>>(platform: P, username: U) -> Self {
        Self::Username {
            platform: platform.into(),
            username: username.into(),
        }
    }

    /// Cache key: target kind, TLD/platform, and name, case-insensitive.
    pub fn cache_key(&self) -> String {
        match self {
            Self::Domain { name, tld } => {
                format!("domain:{}{}", name.to_lowercase(), tld.to_lowercase())
            }
            Self::Username { platform, username } => format!(
                "username:{}:{}",
                platform.to_lowercase(),
                username.to_lowercase()
            ),
        }
    }

    /// Human-readable label ("acme.com", "GitHub/@acme").
    pub fn label(&self) -> String {
        match self {
            Self::Domain { name, tld } => format!("{}{}", name, tld),
            Self::Username { platform, username } => format!("{}/@{}", platform, username),
        }
    }
}

impl ProbeResult {
    /// Create a new probe result; confidence is clamped into [0, 1].
    pub fn new(
        target: ProbeTarget,
        status: Availability,
        source: ProbeSource,
        confidence: f64,
    ) -> Self {
        Self {
            target,
            status,
            source,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == Availability::Available
    }

    pub fn is_taken(&self) -> bool {
        self.status == Availability::Taken
    }

    /// The TLD of a domain result (".com"), `None` for usernames.
    pub fn tld(&self) -> Option<&str> {
        match &self.target {
            ProbeTarget::Domain { tld, .. } => Some(tld),
            ProbeTarget::Username { .. } => None,
        }
    }

    /// The platform of a username result, `None` for domains.
    pub fn platform(&self) -> Option<&str> {
        match &self.target {
            ProbeTarget::Username { platform, .. } => Some(platform),
            ProbeTarget::Domain { .. } => None,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Taken => write!(f, "taken"),
            Availability::Unknown => write!(f, "unknown"),
        }
    }
}

impl fmt::Display for ProbeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeSource::Rdap => write!(f, "rdap"),
            ProbeSource::Dns => write!(f, "dns"),
            ProbeSource::Fallback => write!(f, "fallback"),
            ProbeSource::Http => write!(f, "http"),
            ProbeSource::Skipped => write!(f, "skipped"),
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpretation::Name => write!(f, "name"),
            Interpretation::Domain => write!(f, "domain"),
        }
    }
}
