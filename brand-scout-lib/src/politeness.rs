//! Per-remote-host politeness layer.
//!
//! Every outbound probe request holds a [`PolitenessPermit`] for the host it
//! talks to. Per host, at most `max_per_host` permits are outstanding; extra
//! callers wait in FIFO order (tokio's semaphore is fair). Successive
//! acquisitions for the same host are spaced by a random delay drawn from
//! `[min_spacing, max_spacing]`.
//!
//! Host state is created lazily and lives as long as the layer. The set of
//! probed hosts is small and fixed, so entries are never removed.

use crate::error::BrandScoutError;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Mutex as AsyncMutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;
use tracing::trace;

struct HostGate {
    slots: Arc<Semaphore>,
    last_request: AsyncMutex<Option<Instant>>,
}

/// Concurrency cap and request spacing, keyed by remote host.
pub struct PolitenessLayer {
    hosts: Mutex<HashMap<String, Arc<HostGate>>>,
    max_per_host: usize,
    min_spacing: Duration,
    max_spacing: Duration,
}

/// Proof that the holder may talk to `host`. Dropping it frees the slot.
#[derive(Debug)]
pub struct PolitenessPermit {
    host: String,
    _slot: OwnedSemaphorePermit,
}

impl PolitenessPermit {
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Default for PolitenessLayer {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(200), Duration::from_millis(500))
    }
}

impl PolitenessLayer {
    /// Create a layer with the given per-host cap and spacing window.
    pub fn new(max_per_host: usize, min_spacing: Duration, max_spacing: Duration) -> Self {
        let (min_spacing, max_spacing) = if min_spacing <= max_spacing {
            (min_spacing, max_spacing)
        } else {
            (max_spacing, min_spacing)
        };
        Self {
            hosts: Mutex::new(HashMap::new()),
            max_per_host: max_per_host.max(1),
            min_spacing,
            max_spacing,
        }
    }

    /// Wait for a slot on `host`, then for the spacing since the previous
    /// request to that host to elapse.
    ///
    /// The wait itself is unbounded; callers bound it with their per-probe
    /// timeout.
    ///
    /// # Errors
    ///
    /// Only fails if the host's semaphore has been closed, which this layer
    /// never does.
    pub async fn acquire(&self, host: &str) -> Result<PolitenessPermit, BrandScoutError> {
        let gate = self.gate(host);

        let slot = Arc::clone(&gate.slots)
            .acquire_owned()
            .await
            .map_err(|_| BrandScoutError::internal(format!("host gate for {} closed", host)))?;

        let spacing = self.next_spacing();
        {
            let mut last = gate.last_request.lock().await;
            if let Some(previous) = *last {
                let elapsed = previous.elapsed();
                if elapsed < spacing {
                    trace!(host, wait_ms = (spacing - elapsed).as_millis() as u64, "spacing request");
                    tokio::time::sleep(spacing - elapsed).await;
                }
            }
            *last = Some(Instant::now());
        }

        Ok(PolitenessPermit {
            host: host.to_string(),
            _slot: slot,
        })
    }

    /// Explicitly return a permit. Equivalent to dropping it.
    pub fn release(&self, permit: PolitenessPermit) {
        trace!(host = permit.host(), "releasing politeness permit");
        drop(permit);
    }

    /// Number of permits currently held for `host`.
    pub fn in_flight(&self, host: &str) -> usize {
        let hosts = self.lock_hosts();
        hosts
            .get(host)
            .map(|gate| self.max_per_host - gate.slots.available_permits())
            .unwrap_or(0)
    }

    /// Number of hosts seen so far.
    pub fn host_count(&self) -> usize {
        self.lock_hosts().len()
    }

    pub fn max_per_host(&self) -> usize {
        self.max_per_host
    }

    fn gate(&self, host: &str) -> Arc<HostGate> {
        let mut hosts = self.lock_hosts();
        Arc::clone(hosts.entry(host.to_string()).or_insert_with(|| {
            Arc::new(HostGate {
                slots: Arc::new(Semaphore::new(self.max_per_host)),
                last_request: AsyncMutex::new(None),
            })
        }))
    }

    fn next_spacing(&self) -> Duration {
        let min = self.min_spacing.as_millis() as u64;
        let max = self.max_spacing.as_millis() as u64;
        if min == max {
            return self.min_spacing;
        }
        Duration::from_millis(rand::rng().random_range(min..=max))
    }

    fn lock_hosts(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<HostGate>>> {
        self.hosts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(ms: u64) -> PolitenessLayer {
        PolitenessLayer::new(3, Duration::from_millis(ms), Duration::from_millis(ms))
    }

    #[tokio::test(start_paused = true)]
    async fn test_caps_concurrent_permits_per_host() {
        let layer = fixed(0);
        let a = layer.acquire("github.com").await.unwrap();
        let _b = layer.acquire("github.com").await.unwrap();
        let _c = layer.acquire("github.com").await.unwrap();
        assert_eq!(layer.in_flight("github.com"), 3);

        let blocked =
            tokio::time::timeout(Duration::from_secs(1), layer.acquire("github.com")).await;
        assert!(blocked.is_err(), "fourth permit must wait");

        layer.release(a);
        let d = tokio::time::timeout(Duration::from_secs(1), layer.acquire("github.com")).await;
        assert!(d.is_ok());
        assert_eq!(layer.in_flight("github.com"), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spacing_between_successive_requests() {
        let layer = fixed(300);
        let start = Instant::now();

        drop(layer.acquire("rdap.org").await.unwrap());
        assert_eq!(start.elapsed(), Duration::ZERO);

        drop(layer.acquire("rdap.org").await.unwrap());
        assert!(start.elapsed() >= Duration::from_millis(300));

        drop(layer.acquire("rdap.org").await.unwrap());
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hosts_are_independent() {
        let layer = fixed(400);
        let start = Instant::now();

        let _a = layer.acquire("github.com").await.unwrap();
        let _b = layer.acquire("twitch.tv").await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(layer.host_count(), 2);
        assert_eq!(layer.in_flight("twitch.tv"), 1);
        assert_eq!(layer.in_flight("vimeo.com"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_random_spacing_stays_in_window() {
        let layer = PolitenessLayer::default();
        let mut previous = Instant::now();
        drop(layer.acquire("medium.com").await.unwrap());

        for _ in 0..5 {
            drop(layer.acquire("medium.com").await.unwrap());
            let gap = previous.elapsed();
            assert!(gap >= Duration::from_millis(200));
            previous = Instant::now();
        }
    }
}
