//! Error types for the keypad and its host configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by an engine while processing keypad input.
///
/// The controller never handles these itself; they propagate to the host.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A value action carried a character outside `0`-`9` and `.`.
    #[error("invalid value key: {0:?}")]
    InvalidValue(char),
    /// A seed value that cannot be shown as a number (NaN or infinite).
    #[error("cannot seed the engine with {0}")]
    InvalidSeed(f64),
}

/// Errors loading the host configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
