use crate::core::config::Scheme;
use crate::encoders::algorithms::{radix192, seven};
use log::{debug, trace};
use std::io::{self, Read, Write};

use super::reader::read_block;

/// Streaming encoder.
///
/// Reads one block at a time and writes its unit immediately, so memory use
/// is constant regardless of input size.
pub struct StreamingEncoder<W: Write> {
    scheme: Scheme,
    writer: W,
}

impl<W: Write> StreamingEncoder<W> {
    /// Creates a new streaming encoder.
    ///
    /// # Arguments
    ///
    /// * `scheme` - Which block codec to use
    /// * `writer` - The destination for encoded output
    pub fn new(scheme: Scheme, writer: W) -> Self {
        StreamingEncoder { scheme, writer }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Encodes everything `reader` yields and flushes the writer.
    ///
    /// Returns the number of symbols written.
    pub fn encode<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<u64> {
        let block_len = self.scheme.block_len();
        let mut block = [0u8; radix192::BLOCK_LEN];
        let mut unit = Vec::with_capacity(self.scheme.unit_len() + 1);
        let mut read = 0u64;
        let mut written = 0u64;
        let mut units = 0u64;

        loop {
            let n = read_block(reader, &mut block[..block_len])?;
            if n == 0 {
                break;
            }

            unit.clear();
            match self.scheme {
                Scheme::B128 => seven::encode_block(&block[..n], &mut unit),
                Scheme::B192 => radix192::encode_block(&block[..n], &mut unit),
            }
            self.writer.write_all(&unit)?;

            trace!("{} unit {}: {} bytes -> {} symbols", self.scheme, units, n, unit.len());
            read += n as u64;
            written += unit.len() as u64;
            units += 1;

            if n < block_len {
                break;
            }
        }

        self.writer.flush()?;
        debug!(
            "{} encode: {} bytes -> {} symbols in {} units",
            self.scheme, read, written, units
        );
        Ok(written)
    }

    /// Consumes the encoder, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
