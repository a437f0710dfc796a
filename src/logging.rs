use crate::error::{GameError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "zenmind_games=info";

/// Sends tracing output to `path`. Without a path nothing is installed: the games
/// own the terminal, so stderr is not an option.
pub fn init(path: Option<&Path>) -> Result<()>
{
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| GameError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    if installed.is_ok() {
        tracing::info!(path = %path.display(), "logging started");
    }
    Ok(())
}
