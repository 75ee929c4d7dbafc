use async_trait::async_trait;
use lru::LruCache;
use parking_lot::{Mutex, MutexGuard};
use shortlink_core::{CacheError, ShortCode, UrlCache};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

use crate::Result;

/// A bounded in-memory cache with least-recently-used eviction.
///
/// Every operation, including the promote-on-read and the evict-on-insert
/// sequences, runs under a single mutex, so the cache can be shared between
/// any number of concurrent resolvers. Clones share the same entries.
///
/// Lookups and inserts give up with [`CacheError::Unavailable`] when the
/// mutex cannot be taken within [`LruUrlCache::LOCK_TIMEOUT`].
#[derive(Debug, Clone)]
pub struct LruUrlCache {
    entries: Arc<Mutex<LruCache<String, String>>>,
}

impl LruUrlCache {
    /// Default number of entries held by [`LruUrlCache::default`].
    pub const DEFAULT_CAPACITY: usize = 10_000;

    /// How long a lookup or insert waits for the entries lock.
    pub const LOCK_TIMEOUT: Duration = Duration::from_millis(50);

    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Creates a cache from a plain capacity, rejecting zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            CacheError::Initialization("capacity must be greater than zero".to_string())
        })?;
        Ok(Self::new(capacity))
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Checks for `code` without touching its recency.
    pub fn contains(&self, code: &ShortCode) -> bool {
        self.entries.lock().contains(code.as_str())
    }

    fn lock_entries(&self) -> Result<MutexGuard<'_, LruCache<String, String>>> {
        self.entries.try_lock_for(Self::LOCK_TIMEOUT).ok_or_else(|| {
            CacheError::Unavailable(format!(
                "entries lock not acquired within {:?}",
                Self::LOCK_TIMEOUT
            ))
        })
    }
}

impl Default for LruUrlCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

#[async_trait]
impl UrlCache for LruUrlCache {
    async fn get_url(&self, code: &ShortCode) -> Result<Option<String>> {
        let url = self.lock_entries()?.get(code.as_str()).cloned();
        match url {
            Some(url) => {
                trace!(code = %code, "LRU cache hit");
                Ok(Some(url))
            }
            None => {
                trace!(code = %code, "LRU cache miss");
                Ok(None)
            }
        }
    }

    async fn set_url(&self, code: &ShortCode, url: &str) -> Result<()> {
        let evicted = self
            .lock_entries()?
            .push(code.as_str().to_owned(), url.to_owned());

        if let Some((evicted, _)) = evicted.filter(|(key, _)| key != code.as_str()) {
            debug!(code = %code, evicted = %evicted, "LRU cache full, evicted entry");
        }
        Ok(())
    }
}
