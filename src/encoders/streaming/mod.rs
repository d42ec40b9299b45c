mod decoder;
mod encoder;
mod reader;

pub use decoder::StreamingDecoder;
pub use encoder::StreamingEncoder;

use crate::core::config::Scheme;
use crate::encoders::algorithms::StreamError;
use std::io::{self, Read, Write};

/// Encodes `input` into `output` with the 7-bit scheme.
pub fn encode7<R: Read + ?Sized, W: Write + ?Sized>(input: &mut R, output: &mut W) -> io::Result<u64> {
    StreamingEncoder::new(Scheme::B128, output).encode(input)
}

/// Decodes 7-bit units from `input` into `output`.
pub fn decode7<R: Read + ?Sized, W: Write + ?Sized>(
    input: &mut R,
    output: &mut W,
) -> Result<u64, StreamError> {
    StreamingDecoder::new(Scheme::B128, output).decode(input)
}

/// Encodes `input` into `output` with the 7.5-bit scheme.
pub fn encode192<R: Read + ?Sized, W: Write + ?Sized>(
    input: &mut R,
    output: &mut W,
) -> io::Result<u64> {
    StreamingEncoder::new(Scheme::B192, output).encode(input)
}

/// Decodes 7.5-bit units from `input` into `output`.
pub fn decode192<R: Read + ?Sized, W: Write + ?Sized>(
    input: &mut R,
    output: &mut W,
) -> Result<u64, StreamError> {
    StreamingDecoder::new(Scheme::B192, output).decode(input)
}
