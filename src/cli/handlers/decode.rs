use crate::cli::args::DecodeArgs;
use base192::{Config, Direction};
use std::error::Error;

pub fn handle(args: DecodeArgs, config: &Config) -> Result<(), Box<dyn Error>> {
    let scheme = args.scheme.unwrap_or_else(|| config.settings.scheme());
    super::run(
        scheme,
        Direction::Decode,
        args.file.as_deref(),
        args.output.as_deref(),
    )
}
