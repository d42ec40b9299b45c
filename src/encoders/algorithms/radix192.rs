//! 7.5 bits per symbol: each block of 15 bytes is read as a 120-bit
//! little-endian number and written as 16 base-192 digits.
//!
//! A short final block of `n` bytes only needs its `n + 1` low digits; the
//! rest are zero and are dropped. The pad marker after them tells the decoder
//! to zero-fill the high digits again.

use crate::core::alphabet::{ALPHABET, PAD_CHAR, Symbol, decode_symbol};

use super::UnitKind;
use super::bignum::{BigNumber, DIGITS, base192_decode, base192_encode};
use super::errors::DecodeError;

/// Input bytes per block.
pub const BLOCK_LEN: usize = 15;

/// Symbols per full unit.
pub const UNIT_LEN: usize = DIGITS;

/// Appends the unit for one block of 1 to 15 bytes.
pub fn encode_block(block: &[u8], out: &mut Vec<u8>) {
    debug_assert!(!block.is_empty() && block.len() <= BLOCK_LEN);

    let digits = base192_encode(BigNumber::from_le_bytes(block));
    let emitted = block.len() + 1;
    out.extend(digits[..emitted].iter().map(|&d| ALPHABET[d as usize]));

    if block.len() < BLOCK_LEN {
        out.push(PAD_CHAR);
    }
}

pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(data.len()));
    for block in data.chunks(BLOCK_LEN) {
        encode_block(block, &mut out);
    }
    out
}

/// Exact encoded size of `len` input bytes.
pub fn encoded_len(len: usize) -> usize {
    let tail = len % BLOCK_LEN;
    len / BLOCK_LEN * UNIT_LEN + if tail > 0 { tail + 2 } else { 0 }
}

/// Decodes one unit of at most 16 symbols and appends its bytes to `out`.
///
/// Reading stops at 16 digits or at the pad marker, which must then be the
/// last symbol of `unit`. The unit must describe a number that fits in the
/// bytes it yields; anything larger cannot have been produced by the encoder.
pub fn decode_unit(unit: &[u8], offset: usize, out: &mut Vec<u8>) -> Result<UnitKind, DecodeError> {
    debug_assert!(!unit.is_empty() && unit.len() <= UNIT_LEN);

    let mut digits = [0u8; DIGITS];
    let mut len = 0;
    let mut padded = false;

    for (i, &symbol) in unit.iter().enumerate() {
        match decode_symbol(symbol) {
            Symbol::Digit(d) => {
                digits[len] = d;
                len += 1;
            }
            Symbol::Pad => {
                if i + 1 != unit.len() {
                    return Err(DecodeError::malformed(
                        offset + i + 1,
                        "symbols follow the pad marker",
                    ));
                }
                padded = true;
                break;
            }
            Symbol::Bad => return Err(DecodeError::invalid_symbol(symbol, offset + i)),
        }
    }

    if !padded && len < UNIT_LEN {
        return Err(DecodeError::truncated(offset, len, UNIT_LEN));
    }
    if padded && len < 2 {
        return Err(DecodeError::malformed(
            offset,
            "a padded unit needs at least two digits",
        ));
    }

    // High digits past `len` are still zero from initialisation.
    let bytes = base192_decode(&digits).to_le_bytes();
    let byte_len = len - 1;
    if bytes[byte_len..].iter().any(|&b| b != 0) {
        return Err(DecodeError::malformed(
            offset,
            "unit value does not fit in its block",
        ));
    }

    out.extend_from_slice(&bytes[..byte_len]);
    Ok(if padded { UnitKind::Padded } else { UnitKind::Full })
}

pub fn decode(encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(encoded.len() / UNIT_LEN * BLOCK_LEN + BLOCK_LEN);
    let mut offset = 0;

    for unit in encoded.chunks(UNIT_LEN) {
        let kind = decode_unit(unit, offset, &mut out)?;
        offset += unit.len();
        if kind == UnitKind::Padded && offset < encoded.len() {
            return Err(DecodeError::malformed(
                offset,
                "input continues after the padded final unit",
            ));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_block() {
        let data: Vec<u8> = (1..=15).collect();
        let encoded = encode(&data);
        assert_eq!(encoded.len(), UNIT_LEN);
        assert!(!encoded.contains(&PAD_CHAR));
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_partial_block_lengths() {
        for len in 1..BLOCK_LEN {
            let data = vec![0xA5; len];
            let encoded = encode(&data);
            assert_eq!(encoded.len(), len + 2, "block of {} bytes", len);
            assert_eq!(*encoded.last().unwrap(), PAD_CHAR);
            assert_eq!(encoded.len(), encoded_len(len));
            assert_eq!(decode(&encoded).unwrap(), data);
        }
    }

    #[test]
    fn test_single_byte_digits() {
        // 200 = 1 * 192 + 8
        assert_eq!(encode(&[200]), vec![ALPHABET[8], ALPHABET[1], PAD_CHAR]);
        assert_eq!(encode(&[0]), vec![ALPHABET[0], ALPHABET[0], PAD_CHAR]);
    }

    #[test]
    fn test_all_ones_blocks() {
        let data = vec![0xFF; 45];
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }

    #[test]
    fn test_invalid_symbol_stops_decode() {
        let mut encoded = encode(&[7u8; 40]);
        encoded[20] = b'\\';
        assert_eq!(
            decode(&encoded).unwrap_err(),
            DecodeError::invalid_symbol(b'\\', 20)
        );
    }

    #[test]
    fn test_truncated_unit() {
        let encoded = encode(&[1u8; 30]);
        assert_eq!(
            decode(&encoded[..20]).unwrap_err(),
            DecodeError::truncated(16, 4, UNIT_LEN)
        );
    }

    #[test]
    fn test_pad_too_early() {
        assert!(matches!(
            decode(b"#!"),
            Err(DecodeError::MalformedUnit { position: 0, .. })
        ));
        assert!(matches!(
            decode(b"!"),
            Err(DecodeError::MalformedUnit { position: 0, .. })
        ));
    }

    #[test]
    fn test_symbols_after_pad() {
        assert!(matches!(
            decode(b"##!#"),
            Err(DecodeError::MalformedUnit { position: 3, .. })
        ));
    }

    #[test]
    fn test_overflowing_full_unit() {
        let encoded = [ALPHABET[191]; UNIT_LEN];
        assert!(matches!(
            decode(&encoded),
            Err(DecodeError::MalformedUnit { position: 0, .. })
        ));
    }

    #[test]
    fn test_overflowing_partial_unit() {
        // Two digits can reach 192 * 192 - 1, which does not fit in one byte.
        let encoded = [ALPHABET[191], ALPHABET[191], PAD_CHAR];
        assert!(matches!(
            decode(&encoded),
            Err(DecodeError::MalformedUnit { position: 0, .. })
        ));
    }
}
