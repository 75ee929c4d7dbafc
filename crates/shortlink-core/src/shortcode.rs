use crate::codec;
use crate::error::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A short code as it appears in a public short URL.
///
/// The code is kept verbatim: it is neither normalised nor validated on
/// construction, so a code taken from a request keys the cache exactly as
/// received. Validity is only established by [`ShortCode::decode`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates the short code for a store-assigned identifier.
    pub fn encode(id: u64) -> Self {
        Self(codec::encode(id))
    }

    /// Wraps a code without validating it.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Decodes the code into the identifier it refers to.
    pub fn decode(&self) -> Result<u64, CodecError> {
        codec::decode(&self.0)
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ShortCode {
    fn from(id: u64) -> Self {
        Self::encode(id)
    }
}
