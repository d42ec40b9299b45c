//! Fixed-width positional conversion between 15-byte blocks and 16 base-192 digits.
//!
//! A block is read as a little-endian unsigned integer of at most 120 bits.
//! Since 192^16 > 2^120, sixteen digits always hold it, and since
//! 192^16 < 2^128, folding any sixteen digits back never overflows a `u128`.

use num_integer::Integer;
use num_traits::Zero;

/// Radix of the 7.5-bit scheme.
pub const RADIX: u32 = 192;

/// Digits produced per block.
pub const DIGITS: usize = 16;

/// Maximum number of bytes folded into one number.
pub const MAX_BYTES: usize = 15;

/// Accumulator for one block's base conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct BigNumber(u128);

impl BigNumber {
    /// Folds up to 15 little-endian bytes into a number; missing high bytes are zero.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than 15.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() <= MAX_BYTES,
            "a block holds at most {} bytes, got {}",
            MAX_BYTES,
            bytes.len()
        );
        let mut buf = [0u8; 16];
        buf[..bytes.len()].copy_from_slice(bytes);
        BigNumber(u128::from_le_bytes(buf))
    }

    /// Little-endian view of the full 128-bit container.
    pub fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    pub fn value(self) -> u128 {
        self.0
    }

    /// Number of significant bytes, zero for zero.
    pub fn byte_len(self) -> usize {
        (128 - self.0.leading_zeros() as usize).div_ceil(8)
    }
}

/// Converts a number into 16 base-192 digits, least significant first.
pub fn base192_encode(number: BigNumber) -> [u8; DIGITS] {
    let radix = u128::from(RADIX);
    let mut value = number.0;
    let mut digits = [0u8; DIGITS];

    for digit in digits.iter_mut() {
        let (quotient, remainder) = value.div_rem(&radix);
        *digit = remainder as u8;
        value = quotient;
    }

    debug_assert!(value.is_zero(), "block exceeded 120 bits");
    digits
}

/// Folds 16 base-192 digits, least significant first, back into a number.
///
/// Every digit must be below 192; digits come from the reverse table, which
/// never yields anything larger.
pub fn base192_decode(digits: &[u8; DIGITS]) -> BigNumber {
    let radix = u128::from(RADIX);
    let value = digits
        .iter()
        .rev()
        .fold(u128::zero(), |acc, &digit| acc * radix + u128::from(digit));
    BigNumber(value)
}
