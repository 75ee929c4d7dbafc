//! Read path of the URL shortener.
//!
//! [`Resolver`] turns a short code into the URL it stands for. It is a
//! cache-aside lookup: the cache is consulted with the code exactly as
//! received, and only on a miss is the code decoded and the store queried.
//! Successful store reads populate the cache; nothing else does.
//!
//! ```rust
//! use shortlink_cache::LruUrlCache;
//! use shortlink_core::{ShortCode, UrlStore};
//! use shortlink_redirector::Resolver;
//! use shortlink_storage::InMemoryUrlStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryUrlStore::new();
//! let id = store.insert_or_get_id("https://example.com").await?;
//!
//! let resolver = Resolver::new(store, LruUrlCache::with_capacity(1024)?);
//! let url = resolver.resolve(&ShortCode::encode(id)).await?;
//! assert_eq!(url, "https://example.com");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod resolver;

pub use error::{ResolveError, Result};
pub use redirector::Redirector;
pub use resolver::Resolver;
