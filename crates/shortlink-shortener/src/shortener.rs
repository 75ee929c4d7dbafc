use crate::Result;
use async_trait::async_trait;
use shortlink_core::ShortCode;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores `url` if needed and returns its identifier.
    ///
    /// Calling this repeatedly with the same URL returns the same identifier.
    async fn persist_url(&self, url: &str) -> Result<u64>;

    /// Validates and stores `url`, returning the short code for it.
    async fn shorten(&self, url: &str) -> Result<ShortCode>;
}
