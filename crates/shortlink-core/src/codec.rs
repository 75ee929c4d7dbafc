//! Base-62 conversion between numeric identifiers and short codes.
//!
//! The alphabet is `a-z` (0..=25), `A-Z` (26..=51) and `0-9` (52..=61).
//!
//! [`encode`] emits digits least-significant first and does not reverse
//! them, while [`decode`] folds the code treating its first character as the
//! most significant digit. The two functions are therefore only inverses of
//! each other for identifiers below 62. Codes already handed out depend on
//! this exact layout, so neither side may be "fixed" in isolation:
//!
//! ```
//! use shortlink_core::codec::{decode, encode};
//!
//! assert_eq!(encode(100), "Mb");
//! assert_eq!(decode("Mb").unwrap(), 2357);
//! ```

use crate::error::CodecError;

/// The 62 symbols a short code is made of, indexed by digit value.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes an identifier as a short code, least-significant digit first.
///
/// Identifier `0` encodes to the empty string.
pub fn encode(mut id: u64) -> String {
    let mut code = String::new();
    while id > 0 {
        code.push(ALPHABET[(id % BASE) as usize] as char);
        id /= BASE;
    }
    code
}

/// Decodes a short code, folding characters from left to right.
///
/// The empty code decodes to `0`. Decoding stops at the first character
/// outside [`ALPHABET`] and reports it; no partial identifier is returned.
/// Codes longer than a 64-bit identifier can hold wrap around modulo 2^64.
pub fn decode(code: &str) -> Result<u64, CodecError> {
    code.chars().try_fold(0u64, |id, symbol| {
        let value = symbol_value(symbol).ok_or(CodecError::InvalidSymbol(symbol))?;
        Ok(id.wrapping_mul(BASE).wrapping_add(value))
    })
}

fn symbol_value(symbol: char) -> Option<u64> {
    let value = match symbol {
        'a'..='z' => symbol as u32 - 'a' as u32,
        'A'..='Z' => symbol as u32 - 'A' as u32 + 26,
        '0'..='9' => symbol as u32 - '0' as u32 + 52,
        _ => return None,
    };
    Some(u64::from(value))
}
