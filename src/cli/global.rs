use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Read settings from this TOML file (layered over ~/.config/base192/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Log filter: error, warn, info, debug or trace (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
