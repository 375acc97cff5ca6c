//! DNS fallback for domain probes.
//!
//! Used only when the registration-data lookup is inconclusive. Queries go
//! to the configured recursive resolver, not to the probed domain's own
//! servers.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::TokioAsyncResolver;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// What an address lookup said about a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsOutcome {
    /// At least one address record exists
    Resolved,
    /// NXDOMAIN or no data for the name
    NotFound,
    /// Anything else (timeouts, SERVFAIL, unreachable resolver)
    Failed(String),
}

/// Resolves a fully qualified domain name.
pub trait DnsLookup: Send + Sync {
    fn resolve(&self, domain: &str) -> impl Future<Output = DnsOutcome> + Send;
}

/// Production resolver backed by hickory.
pub struct HickoryDns {
    resolver: TokioAsyncResolver,
}

impl HickoryDns {
    /// Create a resolver using the default upstream configuration.
    pub fn new(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 2;
        // Never append search domains to the probed name
        opts.ndots = 0;

        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

impl DnsLookup for HickoryDns {
    async fn resolve(&self, domain: &str) -> DnsOutcome {
        let fqdn = format!("{}.", domain.trim_end_matches('.'));
        match self.resolver.lookup_ip(fqdn.as_str()).await {
            Ok(lookup) => {
                if lookup.iter().next().is_some() {
                    DnsOutcome::Resolved
                } else {
                    DnsOutcome::NotFound
                }
            }
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => DnsOutcome::NotFound,
                _ => {
                    debug!(domain, error = %e, "DNS lookup failed");
                    DnsOutcome::Failed(e.to_string())
                }
            },
        }
    }
}
