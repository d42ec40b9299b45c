use base192::Config;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Location of the per-user configuration file.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("base192").join("config.toml"))
}

/// Builds the effective configuration.
///
/// Built-in defaults, then the per-user file if it exists, then `explicit`
/// (tilde-expanded), which must exist.
pub fn load_config(explicit: Option<&str>) -> Result<Config, Box<dyn Error>> {
    let mut config = Config::default();

    if let Some(path) = default_config_path() {
        config.merge(Config::load_optional(&path)?);
    }

    if let Some(path) = explicit {
        let expanded = shellexpand::tilde(path);
        config.merge(Config::load_from_file(Path::new(expanded.as_ref()))?);
    }

    Ok(config)
}

/// Initialises logging to stderr.
///
/// `--log-level` wins over `RUST_LOG`, which wins over the config file.
pub fn init_logger(cli_level: Option<&str>, config: &Config) {
    let mut builder = env_logger::Builder::new();
    match cli_level {
        Some(level) => {
            builder.parse_filters(level);
        }
        None => match std::env::var("RUST_LOG") {
            Ok(filters) => {
                builder.parse_filters(&filters);
            }
            Err(_) => {
                builder.parse_filters(config.settings.log_level());
            }
        },
    }
    let _ = builder.try_init();
}
