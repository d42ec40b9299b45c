use crate::cli::args::AlphabetArgs;
use base192::{ALPHABET, Config, PAD_CHAR};
use std::error::Error;
use std::io::{self, Write};

/// Printable name for a symbol byte.
fn symbol_name(byte: u8) -> String {
    match byte {
        b'\t' => "TAB".to_string(),
        0x0B => "VT".to_string(),
        0x1B => "ESC".to_string(),
        0x1C => "FS".to_string(),
        b' ' => "SP".to_string(),
        0xA0 => "NBSP".to_string(),
        0xAD => "SHY".to_string(),
        _ => char::from(byte).to_string(),
    }
}

pub fn handle(args: AlphabetArgs, config: &Config) -> Result<(), Box<dyn Error>> {
    let scheme = args.scheme.unwrap_or_else(|| config.settings.scheme());
    let symbols = &ALPHABET[..scheme.base()];
    let mut out = io::stdout().lock();

    if args.raw {
        out.write_all(symbols)?;
        out.flush()?;
        return Ok(());
    }

    writeln!(out, "{} alphabet: {} symbols, pad '!'\n", scheme, symbols.len())?;
    writeln!(out, "  {:>5}  {:>4}  symbol", "digit", "byte")?;
    for (digit, &byte) in symbols.iter().enumerate() {
        writeln!(out, "  {:>5}  0x{:02X}  {}", digit, byte, symbol_name(byte))?;
    }
    writeln!(out, "  {:>5}  0x{:02X}  {}", "pad", PAD_CHAR, symbol_name(PAD_CHAR))?;
    Ok(())
}
