use core::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Configuration of the `polybft` tool
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log configuration options
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Path to the genesis file, relative paths are resolved against the home directory
    #[serde(default = "default_genesis_file")]
    pub genesis_file: PathBuf,

    /// Defaults of the `schedule` command
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl Config {
    /// The default configuration, with the genesis file at `config/genesis.json`.
    pub fn new() -> Self {
        Self {
            logging: LoggingConfig::default(),
            genesis_file: default_genesis_file(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_genesis_file() -> PathBuf {
    PathBuf::from("config").join("genesis.json")
}

/// How many heights and rounds to compute proposers for
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Number of heights to go through, starting at the genesis height
    pub heights: u64,

    /// Number of rounds to compute at each height
    pub rounds: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            heights: 10,
            rounds: 1,
        }
    }
}

/// Log level and output format of the `polybft` binary
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const ALL: [Self; 5] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// Name of the level, as accepted by `tracing` directives
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Invalid log level: {s}"))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plaintext,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Plaintext, Self::Json]
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| format!("Invalid log format: {s}"))
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
