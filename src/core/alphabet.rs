//! The fixed symbol table shared by both schemes and its reverse lookup.
//!
//! Digits map to single ISO-8859-1 bytes. The table is laid out so that the
//! first 128 entries form the base128 alphabet and all 192 entries form the
//! base192 alphabet:
//!
//! | digits     | bytes                                   |
//! |------------|-----------------------------------------|
//! | 0..=90     | `0x23..=0x7E` except `\`                |
//! | 91..=186   | `0xA0..=0xFF`                           |
//! | 187..=191  | tab, VT, ESC, FS, space                 |
//!
//! `!` is the pad marker. `"` and `\` are never emitted so encoded text can be
//! dropped into quoted strings without escaping.

use crate::encoders::algorithms::DecodeError;

/// Number of symbols in the full (base192) alphabet.
pub const BASE: usize = 192;

/// Number of symbols used by the 7-bit scheme, a prefix of [`ALPHABET`].
pub const BASE7: usize = 128;

/// Marks a short final block.
pub const PAD_CHAR: u8 = b'!';

/// Classification of an input byte during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A digit value in `0..192`.
    Digit(u8),
    /// The pad marker.
    Pad,
    /// Not part of the encoding.
    Bad,
}

const CONTROL_SYMBOLS: [u8; 5] = [b'\t', 0x0B, 0x1B, 0x1C, b' '];

const fn build_alphabet() -> [u8; BASE] {
    let mut table = [0u8; BASE];
    let mut n = 0;

    let mut c = 0x23u8;
    while c <= 0x7E {
        if c != b'\\' {
            table[n] = c;
            n += 1;
        }
        c += 1;
    }

    let mut c = 0xA0u16;
    while c <= 0xFF {
        table[n] = c as u8;
        n += 1;
        c += 1;
    }

    let mut i = 0;
    while i < CONTROL_SYMBOLS.len() {
        table[n] = CONTROL_SYMBOLS[i];
        n += 1;
        i += 1;
    }

    assert!(n == BASE, "alphabet must hold exactly 192 symbols");
    table
}

const fn build_reverse(alphabet: &[u8; BASE]) -> [Symbol; 256] {
    let mut table = [Symbol::Bad; 256];

    let mut digit = 0;
    while digit < BASE {
        let byte = alphabet[digit] as usize;
        assert!(byte != PAD_CHAR as usize, "pad character collides with the alphabet");
        assert!(
            matches!(table[byte], Symbol::Bad),
            "duplicate symbol in the alphabet"
        );
        table[byte] = Symbol::Digit(digit as u8);
        digit += 1;
    }

    table[PAD_CHAR as usize] = Symbol::Pad;
    table
}

const ALPHABET_TABLE: [u8; BASE] = build_alphabet();

/// Digit value to output byte.
pub static ALPHABET: [u8; BASE] = ALPHABET_TABLE;

/// Input byte to digit, pad marker, or invalid.
pub static REVERSE: [Symbol; 256] = build_reverse(&ALPHABET_TABLE);

/// The 7-bit slice of the alphabet.
pub fn alphabet7() -> &'static [u8] {
    &ALPHABET[..BASE7]
}

/// Returns the symbol for `digit`, or `None` if it is not below 192.
#[inline]
pub fn encode_digit(digit: usize) -> Option<u8> {
    ALPHABET.get(digit).copied()
}

#[inline]
pub fn decode_symbol(byte: u8) -> Symbol {
    REVERSE[byte as usize]
}

/// True if `byte` can appear in encoded output, pad marker included.
#[inline]
pub fn is_symbol(byte: u8) -> bool {
    !matches!(decode_symbol(byte), Symbol::Bad)
}

/// Renders encoded bytes as a string, one char per byte (ISO-8859-1).
pub fn to_latin1_string(encoded: &[u8]) -> String {
    encoded.iter().map(|&b| char::from(b)).collect()
}

/// Converts a string back to encoded bytes.
///
/// Fails on the first char outside U+0000..=U+00FF. Chars inside that range
/// are passed through unchanged; whether they are valid symbols is decided by
/// the decoder.
pub fn from_latin1_str(text: &str) -> Result<Vec<u8>, DecodeError> {
    text.char_indices()
        .map(|(position, c)| {
            u8::try_from(c).map_err(|_| DecodeError::NonLatin1 { char: c, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_a_bijection() {
        for (digit, &byte) in ALPHABET.iter().enumerate() {
            assert_eq!(REVERSE[byte as usize], Symbol::Digit(digit as u8));
        }
        let digits = REVERSE
            .iter()
            .filter(|s| matches!(s, Symbol::Digit(_)))
            .count();
        assert_eq!(digits, BASE);
    }

    #[test]
    fn test_pad_and_reserved_bytes() {
        assert_eq!(decode_symbol(PAD_CHAR), Symbol::Pad);
        assert_eq!(decode_symbol(b'"'), Symbol::Bad);
        assert_eq!(decode_symbol(b'\\'), Symbol::Bad);
        assert_eq!(decode_symbol(b'\n'), Symbol::Bad);
        assert_eq!(decode_symbol(b'\r'), Symbol::Bad);
        assert_eq!(decode_symbol(0x7F), Symbol::Bad);
        assert!(!ALPHABET.contains(&PAD_CHAR));
    }

    #[test]
    fn test_table_layout() {
        assert_eq!(ALPHABET[0], b'#');
        assert_eq!(ALPHABET[56], b'[');
        assert_eq!(ALPHABET[57], b']');
        assert_eq!(ALPHABET[90], b'~');
        assert_eq!(ALPHABET[91], 0xA0);
        assert_eq!(ALPHABET[127], 0xC4);
        assert_eq!(ALPHABET[186], 0xFF);
        assert_eq!(&ALPHABET[187..], &CONTROL_SYMBOLS);
        assert_eq!(alphabet7().len(), 128);
    }

    #[test]
    fn test_encode_digit_bounds() {
        assert_eq!(encode_digit(0), Some(b'#'));
        assert_eq!(encode_digit(191), Some(b' '));
        assert_eq!(encode_digit(192), None);
    }

    #[test]
    fn test_latin1_conversion() {
        let encoded = [b'#', 0xA0, 0xFF, b'!'];
        let text = to_latin1_string(&encoded);
        assert_eq!(text, "#\u{a0}\u{ff}!");
        assert_eq!(from_latin1_str(&text).unwrap(), encoded);

        let err = from_latin1_str("ab\u{100}").unwrap_err();
        assert_eq!(
            err,
            DecodeError::NonLatin1 {
                char: '\u{100}',
                position: 2
            }
        );
    }
}
