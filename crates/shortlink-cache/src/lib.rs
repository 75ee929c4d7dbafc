//! Cache implementations for resolved short codes.

pub mod lru_cache;
pub mod noop;

pub use lru_cache::LruUrlCache;
pub use noop::NoopUrlCache;
pub use shortlink_core::cache::Result;
pub use shortlink_core::{CacheError, UrlCache};
