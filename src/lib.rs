//! Editor-safe binary-to-text codecs.
//!
//! Two schemes share one 192-symbol ISO-8859-1 alphabet:
//!
//! - [`Scheme::B128`] packs 7 bytes into 8 symbols (7 bits per symbol).
//! - [`Scheme::B192`] converts 15 bytes into 16 base-192 digits (7.5 bits per symbol).
//!
//! Encoded output never contains `"`, `\`, CR or LF, so it can be embedded in
//! quoted or line-delimited text unchanged.
//!
//! ```
//! use base192::{Scheme, decode, encode};
//!
//! let encoded = encode(b"Hello, World!", Scheme::B192);
//! assert_eq!(decode(&encoded, Scheme::B192).unwrap(), b"Hello, World!");
//! ```

pub mod core;
mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{
    ALPHABET, BASE, BASE7, PAD_CHAR, REVERSE, Symbol, alphabet7, decode_symbol, encode_digit,
    from_latin1_str, is_symbol, to_latin1_string,
};
pub use crate::core::config::{Config, ConfigError, Direction, Scheme, Settings};
pub use encoders::algorithms::bignum::{self, BigNumber, base192_decode, base192_encode};
pub use encoders::algorithms::{DecodeError, StreamError, UnitKind, radix192, seven};
pub use encoders::streaming::{
    StreamingDecoder, StreamingEncoder, decode7, decode192, encode7, encode192,
};

/// Encodes `data` in one pass.
pub fn encode(data: &[u8], scheme: Scheme) -> Vec<u8> {
    match scheme {
        Scheme::B128 => seven::encode(data),
        Scheme::B192 => radix192::encode(data),
    }
}

/// Decodes `encoded` in one pass.
///
/// Returns nothing on failure; use [`StreamingDecoder`] to keep the bytes of
/// the units preceding the error.
pub fn decode(encoded: &[u8], scheme: Scheme) -> Result<Vec<u8>, DecodeError> {
    match scheme {
        Scheme::B128 => seven::decode(encoded),
        Scheme::B192 => radix192::decode(encoded),
    }
}

/// Encodes `data` and renders the symbols as a `String` (one char per symbol).
pub fn encode_to_string(data: &[u8], scheme: Scheme) -> String {
    to_latin1_string(&encode(data, scheme))
}

/// Decodes symbols held in a `String`, as produced by [`encode_to_string`].
pub fn decode_str(encoded: &str, scheme: Scheme) -> Result<Vec<u8>, DecodeError> {
    decode(&from_latin1_str(encoded)?, scheme)
}

/// Exact number of symbols produced for `len` input bytes.
pub fn encoded_len(len: usize, scheme: Scheme) -> usize {
    match scheme {
        Scheme::B128 => seven::encoded_len(len),
        Scheme::B192 => radix192::encoded_len(len),
    }
}

/// Upper bound on the bytes decoded from `len` symbols.
pub fn max_decoded_len(len: usize, scheme: Scheme) -> usize {
    len.div_ceil(scheme.unit_len()) * scheme.block_len()
}
