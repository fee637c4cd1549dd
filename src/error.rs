use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before the log pipeline runs
#[derive(Error, Debug)]
pub enum InputError {
    #[error("file '{}' is not a log file, '*.log' required", .0.display())]
    NotLogFile(PathBuf),

    #[error("file not found at path '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{}'", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
