mod args;
mod config;
mod global;
mod handlers;

use base192::Scheme;
use clap::Parser;
use std::error::Error;

use args::{Cli, Commands};
use config::{init_logger, load_config};

pub fn run() -> Result<(), Box<dyn Error>> {
    // Invoked as e128, d128, e192 or d192: filter stdin to stdout, no arguments.
    let program = std::env::args_os().next();
    if let Some((scheme, direction)) = program
        .as_deref()
        .and_then(|p| p.to_str())
        .and_then(Scheme::from_program_name)
    {
        let config = load_config(None)?;
        init_logger(None, &config);
        log::debug!("multicall: {:?} with {}", direction, scheme);
        return handlers::run_filter(scheme, direction);
    }

    let cli = Cli::parse();
    let config = load_config(cli.global.config.as_deref())?;
    init_logger(cli.global.log_level.as_deref(), &config);

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &config),
        Commands::Alphabet(args) => handlers::alphabet::handle(args, &config),
    }
}
