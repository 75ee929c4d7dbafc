use thiserror::Error;

/// Errors produced while decoding a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("short code contains unsupported symbol '{0}'")]
    InvalidSymbol(char),
}

#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("cache initialization failed: {0}")]
    Initialization(String),
}

/// Failures reported by a URL store.
///
/// A missing record is not an error: lookups return `Ok(None)` for it.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
