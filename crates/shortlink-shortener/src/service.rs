use crate::error::{Result, ShortenerError};
use crate::shortener::Shortener;
use async_trait::async_trait;
use shortlink_core::{ShortCode, UrlStore};
use std::sync::Arc;
use tracing::debug;

/// A concrete implementation of the [`Shortener`] trait.
///
/// The store assigns identifiers; this service only validates input and
/// turns identifiers into short codes.
#[derive(Debug)]
pub struct ShortenerService<S> {
    store: Arc<S>,
}

impl<S> Clone for ShortenerService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: UrlStore> ShortenerService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates that the URL has a valid format (has a scheme and host).
    fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        if url.chars().any(char::is_whitespace) {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must not contain whitespace: {}",
                url
            )));
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a valid scheme and host: {}",
                url
            )));
        };

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if scheme.is_empty() || host.is_empty() {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a valid scheme and host: {}",
                url
            )));
        }

        let scheme = scheme.to_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {}",
                scheme
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<S: UrlStore> Shortener for ShortenerService<S> {
    async fn persist_url(&self, url: &str) -> Result<u64> {
        Ok(self.store.insert_or_get_id(url).await?)
    }

    async fn shorten(&self, url: &str) -> Result<ShortCode> {
        Self::validate_url(url)?;

        let id = self.persist_url(url).await?;
        let code = ShortCode::encode(id);

        debug!(id, code = %code, url, "shortened url");
        Ok(code)
    }
}
