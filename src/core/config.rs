use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which block codec to run.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// 7 bits per symbol: 7 bytes become 8 symbols.
    #[serde(alias = "128")]
    B128,
    /// 7.5 bits per symbol: 15 bytes become 16 symbols.
    #[default]
    #[serde(alias = "192")]
    B192,
}

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Scheme {
    /// Maximum number of input bytes per block.
    pub const fn block_len(self) -> usize {
        match self {
            Scheme::B128 => 7,
            Scheme::B192 => 15,
        }
    }

    /// Number of symbols in a full encoded unit.
    pub const fn unit_len(self) -> usize {
        match self {
            Scheme::B128 => 8,
            Scheme::B192 => 16,
        }
    }

    /// Number of distinct digit symbols used.
    pub const fn base(self) -> usize {
        match self {
            Scheme::B128 => 128,
            Scheme::B192 => 192,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Scheme::B128 => "b128",
            Scheme::B192 => "b192",
        }
    }

    /// Resolves the multicall program names `e128`, `d128`, `e192` and `d192`.
    ///
    /// Accepts a bare name or a path; a trailing `.exe` is ignored.
    pub fn from_program_name(program: &str) -> Option<(Scheme, Direction)> {
        let stem = Path::new(program).file_stem()?.to_str()?;
        match stem {
            "e128" => Some((Scheme::B128, Direction::Encode)),
            "d128" => Some((Scheme::B128, Direction::Decode)),
            "e192" => Some((Scheme::B192, Direction::Encode)),
            "d192" => Some((Scheme::B192, Direction::Decode)),
            _ => None,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b128" | "base128" | "128" | "7" => Ok(Scheme::B128),
            "b192" | "base192" | "192" | "7.5" => Ok(Scheme::B192),
            _ => Err(format!(
                "unknown scheme '{}' (expected b128 or b192)",
                s
            )),
        }
    }
}

/// User settings from `config.toml`.
///
/// Every field is optional so that several files can be layered with
/// [`Settings::merge`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Scheme used when none is given on the command line
    #[serde(default)]
    pub default_scheme: Option<Scheme>,
    /// Log filter passed to the logger (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    /// Overlays `other` on top of `self`; set fields in `other` win.
    pub fn merge(&mut self, other: Settings) {
        if other.default_scheme.is_some() {
            self.default_scheme = other.default_scheme;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.default_scheme.unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}

/// Top-level layout of a configuration file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Reads and parses a configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Loads `path` if it exists; a missing file yields the defaults.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn merge(&mut self, other: Config) {
        self.settings.merge(other.settings);
    }
}

/// Errors raised while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "error: cannot read config '{}': {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "error: invalid config '{}': {}", path.display(), source),
            ConfigError::Parse { path: None, source } => {
                write!(f, "error: invalid config: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_geometry() {
        assert_eq!(Scheme::B128.block_len(), 7);
        assert_eq!(Scheme::B128.unit_len(), 8);
        assert_eq!(Scheme::B192.block_len(), 15);
        assert_eq!(Scheme::B192.unit_len(), 16);
        assert_eq!(Scheme::default(), Scheme::B192);
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("b128".parse::<Scheme>().unwrap(), Scheme::B128);
        assert_eq!("B192".parse::<Scheme>().unwrap(), Scheme::B192);
        assert_eq!("7.5".parse::<Scheme>().unwrap(), Scheme::B192);
        assert!("base64".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_program_names() {
        assert_eq!(
            Scheme::from_program_name("e128"),
            Some((Scheme::B128, Direction::Encode))
        );
        assert_eq!(
            Scheme::from_program_name("/usr/local/bin/d192"),
            Some((Scheme::B192, Direction::Decode))
        );
        assert_eq!(
            Scheme::from_program_name("d128.exe"),
            Some((Scheme::B128, Direction::Decode))
        );
        assert_eq!(Scheme::from_program_name("base192"), None);
    }

    #[test]
    fn test_parse_settings() {
        let config = Config::from_toml(
            r#"
            [settings]
            default_scheme = "b128"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.settings.scheme(), Scheme::B128);
        assert_eq!(config.settings.log_level(), "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.settings.scheme(), Scheme::B192);
        assert_eq!(config.settings.log_level(), "warn");
    }

    #[test]
    fn test_merge_overrides_only_set_fields() {
        let mut base = Config::from_toml("[settings]\ndefault_scheme = \"b128\"\nlog_level = \"info\"").unwrap();
        let overlay = Config::from_toml("[settings]\nlog_level = \"trace\"").unwrap();
        base.merge(overlay);
        assert_eq!(base.settings.scheme(), Scheme::B128);
        assert_eq!(base.settings.log_level(), "trace");
    }

    #[test]
    fn test_invalid_scheme_is_rejected() {
        let err = Config::from_toml("[settings]\ndefault_scheme = \"b64\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }
}
