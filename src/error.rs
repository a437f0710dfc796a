use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the program. Bad player input is never one of these;
/// the games ignore it instead.
#[derive(Debug, Error)]
pub enum GameError
{
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to read storage file {path}: {source}")]
    Storage
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("storage file {path} is not a JSON object of strings: {source}")]
    StorageFormat
    {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    LogFile
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name} must not be empty")]
    EmptySetting
    {
        name: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
