//! 7 bits per symbol: each block of 7 bytes becomes 7 data symbols carrying
//! the low bits plus one trailer symbol carrying the seven high bits.

use crate::core::alphabet::{ALPHABET, BASE7, PAD_CHAR, Symbol, decode_symbol};

use super::UnitKind;
use super::errors::DecodeError;

/// Input bytes per block.
pub const BLOCK_LEN: usize = 7;

/// Symbols per full unit.
pub const UNIT_LEN: usize = 8;

/// Appends the unit for one block of 1 to 7 bytes.
///
/// A short block gets the pad marker between its data symbols and the trailer.
pub fn encode_block(block: &[u8], out: &mut Vec<u8>) {
    debug_assert!(!block.is_empty() && block.len() <= BLOCK_LEN);

    let mut topbits = 0u8;
    let mut mask = 0x40u8;
    for &byte in block {
        out.push(ALPHABET[(byte & 0x7F) as usize]);
        if byte & 0x80 != 0 {
            topbits |= mask;
        }
        mask >>= 1;
    }

    if block.len() < BLOCK_LEN {
        out.push(PAD_CHAR);
    }
    out.push(ALPHABET[topbits as usize]);
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

fn digit7(byte: u8, position: usize) -> Result<u8, DecodeError> {
    match decode_symbol(byte) {
        Symbol::Digit(d) if (d as usize) < BASE7 => Ok(d),
        _ => Err(DecodeError::invalid_symbol(byte, position)),
    }
}

/// Decodes one unit of at most 8 symbols and appends its bytes to `out`.
///
/// `offset` is the position of the unit in the encoded input and is only
/// used for error reporting. Nothing is appended unless the whole unit is
/// valid.
pub fn decode_unit(unit: &[u8], offset: usize, out: &mut Vec<u8>) -> Result<UnitKind, DecodeError> {
    debug_assert!(!unit.is_empty() && unit.len() <= UNIT_LEN);

    let last = unit.len() - 1;
    let topbits = digit7(unit[last], offset + last)?;

    let mut block = [0u8; BLOCK_LEN];
    let mut len = 0;
    let mut pad_at = None;
    let mut mask = 0x40u8;

    for (i, &symbol) in unit[..last].iter().enumerate() {
        if symbol == PAD_CHAR {
            pad_at = Some(i);
            break;
        }
        let mut byte = digit7(symbol, offset + i)?;
        if topbits & mask != 0 {
            byte |= 0x80;
        }
        block[len] = byte;
        len += 1;
        mask >>= 1;
    }

    let kind = match pad_at {
        Some(i) if i + 1 != last => {
            return Err(DecodeError::malformed(
                offset + i + 1,
                "a padded unit must end with exactly one trailer symbol",
            ));
        }
        Some(_) if len == 0 => {
            return Err(DecodeError::malformed(offset, "padded unit carries no data"));
        }
        Some(_) => UnitKind::Padded,
        None if unit.len() < UNIT_LEN => {
            return Err(DecodeError::truncated(offset, unit.len(), UNIT_LEN));
        }
        None => UnitKind::Full,
    };

    out.extend_from_slice(&block[..len]);
    Ok(kind)
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
