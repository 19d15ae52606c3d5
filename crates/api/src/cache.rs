//! In-process time-based cache for a single computed value.
//!
//! The value is recomputed at most once per TTL. There is no invalidation
//! other than expiry.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// A single cached value with a fixed time-to-live.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: RwLock<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Return the cached value if it has not expired.
    pub async fn get(&self) -> Option<T> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    /// Replace the cached value, restarting its TTL.
    pub async fn put(&self, value: T) {
        *self.slot.write().await = Some((Instant::now(), value));
    }

    /// Return the cached value, or compute, store and return a fresh one.
    ///
    /// Errors from `load` are returned as-is and nothing is cached.
    pub async fn get_or_try_load<F, Fut, E>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get().await {
            return Ok(value);
        }
        let value = load().await?;
        self.put(value.clone()).await;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn fresh_value_is_served_from_cache() {
        let cache = TtlCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let v: Result<u32, ()> = cache
                .get_or_try_load(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await;
            assert_eq!(v, Ok(7));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_value_is_reloaded() {
        let cache = TtlCache::new(Duration::ZERO);
        cache.put(1u32).await;
        assert_eq!(cache.get().await, None);

        let v: Result<u32, ()> = cache.get_or_try_load(|| async { Ok(2) }).await;
        assert_eq!(v, Ok(2));
    }

    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
        let v: Result<u32, &str> = cache.get_or_try_load(|| async { Err("db down") }).await;
        assert_eq!(v, Err("db down"));
        assert_eq!(cache.get().await, None);
    }
}
