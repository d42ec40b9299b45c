use std::io::{self, ErrorKind, Read};

/// Fills `buf` from `reader`, stopping early only at end of input.
///
/// Short reads from pipes or sockets are retried so that block boundaries
/// depend on the data alone. Returns the number of bytes read; a value below
/// `buf.len()` means the input is exhausted.
pub(super) fn read_block<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most one byte per call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_read_block_retries_short_reads() {
        let mut reader = Trickle(b"abcdefghij");
        let mut buf = [0u8; 7];
        assert_eq!(read_block(&mut reader, &mut buf).unwrap(), 7);
        assert_eq!(&buf, b"abcdefg");
        assert_eq!(read_block(&mut reader, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"hij");
        assert_eq!(read_block(&mut reader, &mut buf).unwrap(), 0);
    }
}
