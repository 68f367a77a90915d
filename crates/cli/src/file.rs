//! Writing the configuration and genesis files

use std::fs;
use std::path::Path;

use polybft_config::Config;
use polybft_test::Genesis;

use crate::error::Error;

pub fn save_config(config_file: &Path, config: &Config) -> Result<(), Error> {
    write(config_file, toml::to_string_pretty(config)?)
}

pub fn save_genesis(genesis_file: &Path, genesis: &Genesis) -> Result<(), Error> {
    write(genesis_file, serde_json::to_string_pretty(genesis)?)
}

/// Write `contents` to `path`, creating the missing parent directories.
fn write(path: &Path, contents: String) -> Result<(), Error> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
