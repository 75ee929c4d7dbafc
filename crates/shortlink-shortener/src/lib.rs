//! Write path of the URL shortener.
//!
//! Stores URLs idempotently and hands out the short code derived from the
//! identifier the store assigned.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::{Result, ShortenerError};
pub use service::ShortenerService;
pub use shortener::Shortener;
