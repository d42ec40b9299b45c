use base192::Scheme;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::global::GlobalArgs;

#[derive(Parser, Debug)]
#[command(name = "base192")]
#[command(version)]
#[command(
    about = "Encode binary data into editor-safe ISO-8859-1 text at 7 or 7.5 bits per symbol",
    long_about = "Encode binary data into editor-safe ISO-8859-1 text at 7 or 7.5 bits per symbol.\n\n\
                  Installed under the names e128, d128, e192 or d192, the binary runs that \
                  transform from stdin to stdout without parsing any arguments."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode binary data
    Encode(EncodeArgs),
    /// Decode encoded data back to binary
    Decode(DecodeArgs),
    /// Print the symbol table
    Alphabet(AlphabetArgs),
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Scheme to encode with: b128 or b192 (default from config, else b192)
    #[arg(short = 's', long)]
    pub scheme: Option<Scheme>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Scheme the data was encoded with: b128 or b192 (default from config, else b192)
    #[arg(short = 's', long)]
    pub scheme: Option<Scheme>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for printing the alphabet
#[derive(Args, Debug)]
pub struct AlphabetArgs {
    /// Scheme whose symbols to list (default from config, else b192)
    #[arg(short = 's', long)]
    pub scheme: Option<Scheme>,

    /// Write the symbols as raw bytes in digit order, without a table
    #[arg(short = 'r', long)]
    pub raw: bool,
}
