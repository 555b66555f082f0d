//! Single-flight cache for server-provided form metadata.

use crate::Result;
use std::future::Future;
use tokio::sync::Mutex;

/// A lazily-populated slot for a remotely-fetched value.
///
/// The slot lock is held across the fetch, so concurrent callers racing the
/// first population await the in-flight fetch instead of issuing their own.
/// A failed fetch leaves the slot empty and the next caller retries.
#[derive(Debug)]
pub(crate) struct RemoteCache<T> {
    slot: Mutex<Option<T>>,
}

impl<T: Clone> RemoteCache<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value, fetching it on first use.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(value) = slot.as_ref() {
            return Ok(value.clone());
        }
        let value = fetch().await?;
        *slot = Some(value.clone());
        Ok(value)
    }

    /// Drop the cached value; the next read re-fetches.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetches_once_then_serves_from_cache() {
        let cache = RemoteCache::new();
        let fetches = AtomicU32::new(0);

        for _ in 0..3 {
            let got = cache
                .get_or_fetch(|| async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, Error>(7u32)
                })
                .await
                .unwrap();
            assert_eq!(got, 7);
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_reads_share_one_fetch() {
        let cache = RemoteCache::new();
        let fetches = AtomicU32::new(0);

        let fetch = |marker: u32| {
            let fetches = &fetches;
            move || async move {
                fetches.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok::<_, Error>(marker)
            }
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch(fetch(1)),
            cache.get_or_fetch(fetch(2))
        );
        // Both callers see the value produced by the single winning fetch.
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_slot_empty() {
        let cache = RemoteCache::new();

        let err = cache
            .get_or_fetch(|| async { Err::<u32, _>(Error::network("refused")) })
            .await;
        assert!(err.is_err());

        let got = cache
            .get_or_fetch(|| async { Ok::<_, Error>(9u32) })
            .await
            .unwrap();
        assert_eq!(got, 9);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = RemoteCache::new();
        let fetches = AtomicU32::new(0);

        for _ in 0..2 {
            cache
                .get_or_fetch(|| async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, Error>(())
                })
                .await
                .unwrap();
            cache.invalidate().await;
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }
}
