use std::fmt;
use std::io;

/// Errors that can occur during decoding.
///
/// Positions are byte offsets into the encoded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte that is neither an alphabet symbol nor the pad marker, or a
    /// symbol outside the 7-bit alphabet in a base128 unit
    InvalidSymbol { byte: u8, position: usize },
    /// The input ended inside a unit that carries no pad marker
    TruncatedUnit {
        position: usize,
        found: usize,
        expected: usize,
    },
    /// A unit whose structure or value cannot have come from the encoder
    MalformedUnit {
        position: usize,
        reason: &'static str,
    },
    /// Text input contains a char that has no single-byte representation
    NonLatin1 { char: char, position: usize },
}

impl DecodeError {
    pub fn invalid_symbol(byte: u8, position: usize) -> Self {
        DecodeError::InvalidSymbol { byte, position }
    }

    pub fn truncated(position: usize, found: usize, expected: usize) -> Self {
        DecodeError::TruncatedUnit {
            position,
            found,
            expected,
        }
    }

    pub fn malformed(position: usize, reason: &'static str) -> Self {
        DecodeError::MalformedUnit { position, reason }
    }

    /// Offset in the encoded input at which decoding stopped.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::InvalidSymbol { position, .. }
            | DecodeError::TruncatedUnit { position, .. }
            | DecodeError::MalformedUnit { position, .. }
            | DecodeError::NonLatin1 { position, .. } => *position,
        }
    }

    fn render(&self, f: &mut impl fmt::Write, use_color: bool) -> fmt::Result {
        let (error, hint) = if use_color {
            ("\x1b[1;31merror:\x1b[0m", "\x1b[1;36mhint:\x1b[0m")
        } else {
            ("error:", "hint:")
        };

        match self {
            DecodeError::InvalidSymbol { byte, position } => {
                writeln!(
                    f,
                    "{} invalid symbol 0x{:02X} at position {}",
                    error, byte, position
                )?;
                writeln!(f)?;
                write!(
                    f,
                    "{} encoded data may only contain alphabet symbols and '!'; \
                     line breaks and quotes are not part of the encoding",
                    hint
                )
            }
            DecodeError::TruncatedUnit {
                position,
                found,
                expected,
            } => {
                writeln!(f, "{} truncated unit at position {}", error, position)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  unit has {} symbols, expected {} or a '!' pad marker",
                    found, expected
                )?;
                writeln!(f)?;
                write!(f, "{} the input appears to have been cut short", hint)
            }
            DecodeError::MalformedUnit { position, reason } => {
                writeln!(f, "{} malformed unit at position {}", error, position)?;
                writeln!(f)?;
                writeln!(f, "  {}", reason)?;
                writeln!(f)?;
                write!(
                    f,
                    "{} check that the data was encoded with the same scheme",
                    hint
                )
            }
            DecodeError::NonLatin1 { char: c, position } => {
                writeln!(
                    f,
                    "{} character '{}' (U+{:04X}) at position {} is outside ISO-8859-1",
                    error, c, *c as u32, position
                )?;
                writeln!(f)?;
                write!(
                    f,
                    "{} encoded text must be read as Latin-1, not re-encoded as UTF-8",
                    hint
                )
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, should_use_color())
    }
}

impl std::error::Error for DecodeError {}

/// Failure of a streaming transform.
#[derive(Debug)]
pub enum StreamError {
    Decode(DecodeError),
    Io(io::Error),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Decode(e) => fmt::Display::fmt(e, f),
            StreamError::Io(e) => write!(f, "error: {}", e),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Decode(e) => Some(e),
            StreamError::Io(e) => Some(e),
        }
    }
}

impl From<DecodeError> for StreamError {
    fn from(e: DecodeError) -> Self {
        StreamError::Decode(e)
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(err: &DecodeError) -> String {
        let mut out = String::new();
        err.render(&mut out, false).unwrap();
        out
    }

    #[test]
    fn test_invalid_symbol_display() {
        let display = plain(&DecodeError::invalid_symbol(b'\n', 17));
        assert!(display.contains("invalid symbol 0x0A at position 17"));
        assert!(display.contains("hint:"));
        assert!(!display.contains('\x1b'));
    }

    #[test]
    fn test_truncated_display() {
        let display = plain(&DecodeError::truncated(32, 5, 16));
        assert!(display.contains("truncated unit at position 32"));
        assert!(display.contains("unit has 5 symbols, expected 16"));
    }

    #[test]
    fn test_malformed_display() {
        let display = plain(&DecodeError::malformed(8, "symbols follow the pad marker"));
        assert!(display.contains("malformed unit at position 8"));
        assert!(display.contains("symbols follow the pad marker"));
    }

    #[test]
    fn test_colored_display() {
        let mut out = String::new();
        DecodeError::invalid_symbol(0, 0).render(&mut out, true).unwrap();
        assert!(out.starts_with("\x1b[1;31merror:"));
    }

    #[test]
    fn test_position() {
        assert_eq!(DecodeError::invalid_symbol(b'"', 3).position(), 3);
        assert_eq!(DecodeError::truncated(16, 1, 16).position(), 16);
    }

    #[test]
    fn test_stream_error_wraps_sources() {
        let err: StreamError = DecodeError::invalid_symbol(b'"', 3).into();
        assert!(matches!(err, StreamError::Decode(_)));
        let err: StreamError = io::Error::other("disk on fire").into();
        assert!(err.to_string().contains("disk on fire"));
    }
}
