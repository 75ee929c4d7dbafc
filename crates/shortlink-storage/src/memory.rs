use async_trait::async_trait;
use dashmap::DashMap;
use shortlink_core::repository::Result;
use shortlink_core::{ReadUrlStore, UrlRecord, UrlStore};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct Tables {
    ids_by_url: DashMap<String, u64>,
    urls_by_id: DashMap<u64, String>,
    next_id: AtomicU64,
}

/// In-memory URL store using DashMap.
///
/// Identifiers are handed out from 1 upwards, like an auto-increment key.
/// The url index is updated through DashMap's entry API, which holds the
/// shard lock while a new identifier is assigned, so concurrent inserts of
/// the same URL agree on one identifier. Clones share the same tables.
#[derive(Debug, Clone)]
pub struct InMemoryUrlStore {
    tables: Arc<Tables>,
}

impl InMemoryUrlStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tables: Arc::new(Tables {
                ids_by_url: DashMap::with_capacity(capacity),
                urls_by_id: DashMap::with_capacity(capacity),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Number of stored URLs.
    pub fn len(&self) -> usize {
        self.tables.urls_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.urls_by_id.is_empty()
    }
}

impl Default for InMemoryUrlStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadUrlStore for InMemoryUrlStore {
    async fn get_url_by_id(&self, id: u64) -> Result<Option<UrlRecord>> {
        Ok(self.tables.urls_by_id.get(&id).map(|url| UrlRecord {
            id,
            url: url.value().clone(),
        }))
    }
}

#[async_trait]
impl UrlStore for InMemoryUrlStore {
    async fn insert_or_get_id(&self, url: &str) -> Result<u64> {
        if let Some(id) = self.tables.ids_by_url.get(url) {
            return Ok(*id);
        }

        // The record is written before the identifier leaves the entry guard,
        // so any code derived from the returned id resolves immediately.
        let id = *self
            .tables
            .ids_by_url
            .entry(url.to_owned())
            .or_insert_with(|| {
                let id = self.tables.next_id.fetch_add(1, Ordering::SeqCst);
                self.tables.urls_by_id.insert(id, url.to_owned());
                id
            });

        Ok(id)
    }
}
