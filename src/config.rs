//! Command-line configuration for the terminal binary.

use std::fmt;
use std::str::FromStr;

use log::LevelFilter;

use crate::board::{Color, SearchConfig};

/// Environment variable consulted for the log level when `--log` is absent
pub const LOG_ENV: &str = "CHESS_LOG";

pub const USAGE: &str = "\
usage: chess_rules_engine [options]

options:
  --depth N              search depth in plies (default 4)
  --threads N            root search threads (default 1)
  --white human|engine   who plays White (default human)
  --black human|engine   who plays Black (default engine)
  --log LEVEL            off, error, warn, info, debug or trace
  --help                 print this message";

/// Who makes the moves for one color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Engine,
}

impl FromStr for PlayerKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "engine" => Ok(PlayerKind::Engine),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option given without its value
    MissingValue { option: String },
    /// Option value could not be parsed
    InvalidValue { option: String, value: String },
    UnknownOption { option: String },
    /// `--help` was given; the caller prints `USAGE`
    HelpRequested,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue { option } => write!(f, "Option '{option}' needs a value"),
            ConfigError::InvalidValue { option, value } => {
                write!(f, "Invalid value '{value}' for option '{option}'")
            }
            ConfigError::UnknownOption { option } => write!(f, "Unknown option '{option}'"),
            ConfigError::HelpRequested => write!(f, "Help requested"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub log_level: LevelFilter,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search: SearchConfig::default(),
            white: PlayerKind::Human,
            black: PlayerKind::Engine,
            log_level: LevelFilter::Warn,
        }
    }
}

fn parse_value<T: FromStr>(option: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue {
        option: option.to_string(),
    })?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        option: option.to_string(),
        value,
    })
}

impl EngineConfig {
    /// Build from the process arguments and `CHESS_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_level = std::env::var(LOG_ENV).ok();
        Self::parse(std::env::args().skip(1), env_level.as_deref())
    }

    /// Parse options (program name already stripped). `env_level` seeds the
    /// log level and is overridden by `--log`; an unparsable value is ignored.
    pub fn parse<I>(args: I, env_level: Option<&str>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = EngineConfig::default();
        if let Some(level) = env_level.and_then(|text| text.parse().ok()) {
            config.log_level = level;
        }

        let mut args = args.into_iter();
        while let Some(option) = args.next() {
            match option.as_str() {
                "--depth" => config.search.depth = parse_value(&option, args.next())?,
                "--threads" => config.search.threads = parse_value(&option, args.next())?,
                "--white" => config.white = parse_value(&option, args.next())?,
                "--black" => config.black = parse_value(&option, args.next())?,
                "--log" => config.log_level = parse_value(&option, args.next())?,
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                _ => return Err(ConfigError::UnknownOption { option }),
            }
        }
        Ok(config)
    }

    #[must_use]
    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}
