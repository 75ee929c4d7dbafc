use shortlink_core::{CodecError, ShortCode, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Why a short code could not be resolved.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The code is not a valid base-62 code. Caused by the client.
    #[error(transparent)]
    InvalidCode(#[from] CodecError),
    /// The code is well formed but nothing is stored under its identifier.
    #[error("no url stored for short code '{code}' (id {id})")]
    NotFound { code: ShortCode, id: u64 },
    /// The store failed for any other reason. Never retried here.
    #[error("storage operation failed: {0}")]
    StoreFailure(#[from] StorageError),
}

impl ResolveError {
    /// The character that made decoding fail, if that is why resolving failed.
    pub fn invalid_symbol(&self) -> Option<char> {
        match self {
            ResolveError::InvalidCode(CodecError::InvalidSymbol(symbol)) => Some(*symbol),
            _ => None,
        }
    }
}
