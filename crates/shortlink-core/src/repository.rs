use crate::error::StorageError;
use async_trait::async_trait;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored URL and the identifier the store assigned to it.
///
/// Records are created once and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: u64,
    pub url: String,
}

/// A read-only view of a URL store.
///
/// The redirector only needs lookups by identifier, so it is written against
/// this trait rather than [`UrlStore`].
#[async_trait]
pub trait ReadUrlStore: Send + Sync + 'static {
    /// Retrieves the record for a given identifier.
    /// Returns `None` if no URL was stored under that identifier.
    async fn get_url_by_id(&self, id: u64) -> Result<Option<UrlRecord>>;
}

#[async_trait]
pub trait UrlStore: ReadUrlStore {
    /// Stores `url` if it is not present yet and returns its identifier.
    ///
    /// Idempotent: the same URL always yields the same identifier, also when
    /// several callers insert it concurrently.
    async fn insert_or_get_id(&self, url: &str) -> Result<u64>;
}
