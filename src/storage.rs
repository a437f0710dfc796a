use crate::error::{GameError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Key the dashboard uses to remember who is playing.
pub const USER_KEY: &str = "zenmind_user";

/// Read-only view of locally persisted values.
pub trait Storage
{
    fn get(&self, key: &str) -> Option<String>;
}

/// A JSON object of string values, e.g. `{"zenmind_user": "Ana"}`. Values are
/// returned exactly as stored.
#[derive(Debug, Default, Clone)]
pub struct FileStorage
{
    values: HashMap<String, String>,
}

impl FileStorage
{
    pub fn load(path: &Path) -> Result<Self>
    {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no storage file, starting empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(GameError::Storage {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&raw).map_err(|source| GameError::StorageFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// An empty or blank file counts as an empty store.
    pub fn parse(raw: &str) -> serde_json::Result<Self>
    {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let values: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { values })
    }
}

impl Storage for FileStorage
{
    fn get(&self, key: &str) -> Option<String>
    {
        self.values.get(key).cloned()
    }
}

impl Storage for HashMap<String, String>
{
    fn get(&self, key: &str) -> Option<String>
    {
        HashMap::get(self, key).cloned()
    }
}
