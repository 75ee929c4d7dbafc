use async_trait::async_trait;
use shortlink_core::{ShortCode, UrlCache};

use crate::Result;

/// A cache that never holds anything.
///
/// Used when caching is disabled; every lookup goes to the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUrlCache;

#[async_trait]
impl UrlCache for NoopUrlCache {
    async fn get_url(&self, _code: &ShortCode) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_url(&self, _code: &ShortCode, _url: &str) -> Result<()> {
        Ok(())
    }
}
