//! Errors raised while writing the files of the `polybft` home directory.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode configuration as TOML: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Failed to encode genesis as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
