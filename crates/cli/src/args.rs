//! Command-line interface configuration
//!
//! The CLI reads its configuration from the configuration file found in the directory
//! provided with the `--home` global parameter, layered with `POLYBFT__*` environment variables.
//!
//! The command-line parameters are stored in the `Args` structure.
//! `clap` parses the command-line parameters into this structure.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Context, Result};
use directories::BaseDirs;
use tracing::info;

use polybft_config::{Config, LogFormat, LogLevel};
use polybft_test::Genesis;

use crate::cmd::init::InitCmd;
use crate::cmd::schedule::ScheduleCmd;
use crate::cmd::update::UpdateCmd;

const APP_FOLDER: &str = ".polybft";
const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "POLYBFT";

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Home directory (default: `~/.polybft`)
    #[arg(long, global = true, value_name = "HOME_DIR")]
    pub home: Option<PathBuf>,

    /// Log level (default: `info`)
    #[arg(long, global = true, value_name = "LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log format (default: `plaintext`)
    #[arg(long, global = true, value_name = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Initialize configuration and generate a genesis file
    Init(InitCmd),

    /// Print the proposer of every round over a range of heights
    Schedule(ScheduleCmd),

    /// Apply a validator set change after the genesis height
    Update(UpdateCmd),
}

impl Args {
    /// new returns a new instance of the configuration.
    pub fn new() -> Args {
        Args::parse()
    }

    /// get_home_dir returns the application home folder.
    /// Typically, `$HOME/.polybft`, dependent on the operating system.
    pub fn get_home_dir(&self) -> Result<PathBuf> {
        match self.home {
            Some(ref path) => Ok(path.clone()),
            None => Ok(BaseDirs::new()
                .ok_or_else(|| eyre!("could not determine home directory path"))?
                .home_dir()
                .join(APP_FOLDER)),
        }
    }

    /// get_config_dir returns the configuration folder based on the home folder.
    pub fn get_config_dir(&self) -> Result<PathBuf> {
        Ok(self.get_home_dir()?.join("config"))
    }

    /// get_config_file_path returns the configuration file path based on the command-line arguments
    /// and the configuration folder.
    pub fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join(CONFIG_FILE))
    }

    /// get_genesis_file_path returns the genesis file path of the configuration,
    /// relative paths being resolved against the home folder.
    pub fn get_genesis_file_path(&self, config: &Config) -> Result<PathBuf> {
        if config.genesis_file.is_absolute() {
            Ok(config.genesis_file.clone())
        } else {
            Ok(self.get_home_dir()?.join(&config.genesis_file))
        }
    }

    /// load_config returns a configuration compiled from the configuration file,
    /// the environment and the command-line parameters.
    ///
    /// A missing configuration file yields the default configuration.
    pub fn load_config(&self) -> Result<Config> {
        let config_file = self.get_config_file_path()?;

        let mut config: Config = config::Config::builder()
            .add_source(config::File::from(config_file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        if let Some(log_level) = self.log_level {
            config.logging.log_level = log_level;
        }

        if let Some(log_format) = self.log_format {
            config.logging.log_format = log_format;
        }

        Ok(config)
    }

    /// load_genesis returns the genesis found at the location given by the configuration
    pub fn load_genesis(&self, config: &Config) -> Result<Genesis> {
        let genesis_file = self.get_genesis_file_path(config)?;
        info!("Loading genesis from {:?}", genesis_file.display());
        load_json_file(&genesis_file)
    }
}

pub fn load_json_file<T>(file: &Path) -> Result<T>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let content = std::fs::read_to_string(file)
        .wrap_err_with(|| eyre!("Failed to read file at {}", file.display()))?;

    serde_json::from_str(&content)
        .wrap_err_with(|| eyre!("Failed to parse JSON at {}", file.display()))
}
