//! Core types and traits for the shortlink URL shortener.
//!
//! This crate provides the base-62 short code codec together with the
//! store and cache abstractions shared by the shortener (write path) and
//! the redirector (read path).

pub mod cache;
pub mod codec;
pub mod error;
pub mod repository;
pub mod shortcode;

pub use cache::UrlCache;
pub use codec::{decode, encode, ALPHABET};
pub use error::{CacheError, CodecError, StorageError};
pub use repository::{ReadUrlStore, UrlRecord, UrlStore};
pub use shortcode::ShortCode;
