use crate::cli::args::EncodeArgs;
use base192::{Config, Direction};
use std::error::Error;

pub fn handle(args: EncodeArgs, config: &Config) -> Result<(), Box<dyn Error>> {
    let scheme = args.scheme.unwrap_or_else(|| config.settings.scheme());
    super::run(
        scheme,
        Direction::Encode,
        args.file.as_deref(),
        args.output.as_deref(),
    )
}
