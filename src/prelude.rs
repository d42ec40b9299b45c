//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base192::prelude::*;
//!
//! let encoded = encode(&[0xFF; 7], Scheme::B128);
//! assert_eq!(encoded.len(), 8);
//! assert_eq!(decode(&encoded, Scheme::B128).unwrap(), [0xFF; 7]);
//! ```

pub use crate::{
    // Errors
    DecodeError,
    // Config
    Direction,
    PAD_CHAR,
    Scheme,
    StreamError,

    // Streaming
    StreamingDecoder,
    StreamingEncoder,

    // Core encoding/decoding
    decode,
    decode_str,
    decode7,
    decode192,
    encode,
    encode_to_string,
    encode7,
    encode192,
};
