use crate::core::config::Scheme;
use crate::encoders::algorithms::{DecodeError, StreamError, UnitKind, radix192, seven};
use log::{debug, trace, warn};
use std::io::{Read, Write};

use super::reader::read_block;

/// Streaming decoder.
///
/// Each unit is validated completely before any of its bytes are written.
/// On error, the output holds exactly the bytes of the units that preceded
/// the failing one.
pub struct StreamingDecoder<W: Write> {
    scheme: Scheme,
    writer: W,
}

impl<W: Write> StreamingDecoder<W> {
    /// Creates a new streaming decoder.
    ///
    /// # Arguments
    ///
    /// * `scheme` - The scheme the data was encoded with
    /// * `writer` - The destination for decoded output
    pub fn new(scheme: Scheme, writer: W) -> Self {
        StreamingDecoder { scheme, writer }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Decodes everything `reader` yields and flushes the writer.
    ///
    /// Returns the number of bytes written.
    pub fn decode<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<u64, StreamError> {
        let result = self.decode_units(reader);
        // Bytes of earlier units stay visible to the caller even on failure.
        let flushed = self.writer.flush();

        match result {
            Ok(written) => {
                flushed?;
                Ok(written)
            }
            Err(StreamError::Decode(e)) => {
                warn!("{} decode stopped at position {}", self.scheme, e.position());
                Err(StreamError::Decode(e))
            }
            Err(e) => Err(e),
        }
    }

    fn decode_units<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<u64, StreamError> {
        let unit_len = self.scheme.unit_len();
        let mut unit = [0u8; radix192::UNIT_LEN];
        let mut block = Vec::with_capacity(self.scheme.block_len());
        let mut offset = 0usize;
        let mut written = 0u64;
        let mut units = 0u64;

        loop {
            let n = read_block(reader, &mut unit[..unit_len])?;
            if n == 0 {
                break;
            }

            block.clear();
            let kind = match self.scheme {
                Scheme::B128 => seven::decode_unit(&unit[..n], offset, &mut block)?,
                Scheme::B192 => radix192::decode_unit(&unit[..n], offset, &mut block)?,
            };
            self.writer.write_all(&block)?;

            trace!("{} unit {}: {} symbols -> {} bytes", self.scheme, units, n, block.len());
            offset += n;
            written += block.len() as u64;
            units += 1;

            if kind == UnitKind::Padded {
                let mut probe = [0u8; 1];
                if n == unit_len && read_block(reader, &mut probe)? > 0 {
                    return Err(DecodeError::malformed(
                        offset,
                        "input continues after the padded final unit",
                    )
                    .into());
                }
                break;
            }
            if n < unit_len {
                break;
            }
        }

        debug!(
            "{} decode: {} symbols -> {} bytes in {} units",
            self.scheme, offset, written, units
        );
        Ok(written)
    }

    /// Consumes the decoder, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
