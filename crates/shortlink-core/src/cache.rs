use crate::error::CacheError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, CacheError>;

/// A cache from short codes to resolved URLs.
///
/// Keys are the short codes exactly as they were requested. Values must only
/// ever come from a successful store read; the cache is an optimisation and
/// callers treat its failures as misses.
#[async_trait]
pub trait UrlCache: Send + Sync + 'static {
    /// Get the URL cached for `code`.
    ///
    /// Returns `Ok(None)` if the key is not in the cache.
    async fn get_url(&self, code: &ShortCode) -> Result<Option<String>>;

    /// Store the URL resolved for `code`, evicting older entries if needed.
    async fn set_url(&self, code: &ShortCode, url: &str) -> Result<()>;
}
