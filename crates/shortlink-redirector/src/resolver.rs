use std::sync::Arc;

use crate::error::{ResolveError, Result};
use crate::redirector::Redirector;
use async_trait::async_trait;
use shortlink_core::{ReadUrlStore, ShortCode, UrlCache};
use tracing::{debug, trace, warn};

/// Cache-aside resolver for short codes.
///
/// Holds the store handle and the cache it was built with; clones share
/// both. The resolver performs at most one cache lookup, one decode, one
/// store read and one cache insert per call, and never retries.
#[derive(Debug)]
pub struct Resolver<S, C> {
    store: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> Clone for Resolver<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<S: ReadUrlStore, C: UrlCache> Resolver<S, C> {
    /// Creates a resolver over `store`, caching results in `cache`.
    pub fn new(store: S, cache: C) -> Self {
        Self {
            store: Arc::new(store),
            cache: Arc::new(cache),
        }
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Resolves a short code to its URL.
    ///
    /// # Returns
    ///
    /// * `Ok(url)` - The URL stored for the code's identifier
    /// * `Err(ResolveError::InvalidCode)` - The code contains a symbol outside the alphabet
    /// * `Err(ResolveError::NotFound)` - Nothing is stored under the decoded identifier
    /// * `Err(ResolveError::StoreFailure)` - The store could not be queried
    pub async fn resolve(&self, code: &ShortCode) -> Result<String> {
        trace!(code = %code, "resolving short code");

        match self.cache.get_url(code).await {
            Ok(Some(url)) => {
                debug!(code = %code, "cache hit");
                return Ok(url);
            }
            Ok(None) => trace!(code = %code, "cache miss"),
            Err(e) => warn!(code = %code, error = %e, "cache lookup failed, reading from store"),
        }

        let id = code.decode()?;

        let Some(record) = self.store.get_url_by_id(id).await? else {
            trace!(code = %code, id, "short code not found");
            return Err(ResolveError::NotFound {
                code: code.clone(),
                id,
            });
        };

        if let Err(e) = self.cache.set_url(code, &record.url).await {
            warn!(code = %code, error = %e, "failed to cache resolved url");
        }

        debug!(code = %code, id, url = %record.url, "resolved short code");
        Ok(record.url)
    }
}

#[async_trait]
impl<S: ReadUrlStore, C: UrlCache> Redirector for Resolver<S, C> {
    async fn resolve(&self, code: &ShortCode) -> Result<String> {
        Resolver::resolve(self, code).await
    }
}
