pub mod alphabet;
pub mod decode;
pub mod encode;

use base192::{Direction, Scheme, StreamingDecoder, StreamingEncoder};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Opens `file`, or stdin when absent. Input is always read as raw bytes.
pub fn open_input(file: Option<&Path>) -> io::Result<Box<dyn Read>> {
    Ok(match file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin().lock())),
    })
}

/// Creates `file`, or uses stdout when absent.
pub fn open_output(file: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match file {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// Runs one transform, streaming unit by unit between `input` and `output`.
///
/// On a decode error the output keeps the bytes of the units before it.
pub fn run(
    scheme: Scheme,
    direction: Direction,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let mut reader = open_input(input)?;
    let mut writer = open_output(output)?;
    match direction {
        Direction::Encode => {
            StreamingEncoder::new(scheme, &mut writer).encode(&mut reader)?;
        }
        Direction::Decode => {
            StreamingDecoder::new(scheme, &mut writer).decode(&mut reader)?;
        }
    }
    Ok(())
}

/// Runs one transform from stdin to stdout.
pub fn run_filter(scheme: Scheme, direction: Direction) -> Result<(), Box<dyn Error>> {
    run(scheme, direction, None, None)
}
