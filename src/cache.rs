//! In-memory caching using moka
//!
//! Memoizes project totals. The cache key is a SHA-256 fingerprint of the
//! serialized project (rooms, items and rate card), so any edit to the project
//! or a replaced rate card produces a new key and forces a recompute.

use moka::future::Cache;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::pricing::{compute_totals, Project, Totals};

/// Memoized totals keyed by project fingerprint
#[derive(Clone)]
pub struct TotalsCache {
    totals: Cache<String, Arc<Totals>>,
}

impl TotalsCache {
    /// Create a cache holding at most `capacity` entries for `ttl`
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            totals: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Fingerprint of everything that influences the totals
    pub fn fingerprint(project: &Project) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(project)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    /// Return cached totals for this exact project state, computing them on a miss.
    pub async fn get_or_compute(&self, project: &Project) -> Arc<Totals> {
        let key = match Self::fingerprint(project) {
            Ok(key) => key,
            Err(e) => {
                warn!("Failed to fingerprint project, computing uncached: {}", e);
                return Arc::new(compute_totals(project));
            }
        };

        if let Some(cached) = self.totals.get(&key).await {
            debug!("Cache HIT for totals: {}", key);
            return cached;
        }

        debug!("Cache MISS for totals: {}", key);
        let totals = Arc::new(compute_totals(project));
        self.totals.insert(key, totals.clone()).await;
        totals
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            totals_size: self.totals.entry_count(),
        }
    }
}

impl Default for TotalsCache {
    fn default() -> Self {
        // 1000 entries, 10 min TTL
        Self::new(1000, Duration::from_secs(10 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub totals_size: u64,
}
