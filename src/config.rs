use crate::error::{GameError, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_DASHBOARD: &str = "dashboard.html";
const DEFAULT_STORAGE: &str = ".zenmind_storage.json";

pub const DASHBOARD_VAR: &str = "ZENMIND_DASHBOARD";
pub const STORAGE_VAR: &str = "ZENMIND_STORAGE";
pub const LOG_VAR: &str = "ZENMIND_LOG";

/// Process-level settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings
{
    pub dashboard: String,
    pub storage_path: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl Settings
{
    pub fn from_env() -> Result<Self>
    {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from any variable source; unset variables fall back to defaults,
    /// set-but-empty ones are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self>
    {
        let dashboard = match lookup(DASHBOARD_VAR) {
            Some(value) => non_empty(DASHBOARD_VAR, value)?,
            None => DEFAULT_DASHBOARD.to_string(),
        };
        let storage_path = match lookup(STORAGE_VAR) {
            Some(value) => PathBuf::from(non_empty(STORAGE_VAR, value)?),
            None => PathBuf::from(DEFAULT_STORAGE),
        };
        let log_path = lookup(LOG_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            dashboard,
            storage_path,
            log_path,
        })
    }
}

impl Default for Settings
{
    fn default() -> Self
    {
        Self {
            dashboard: DEFAULT_DASHBOARD.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE),
            log_path: None,
        }
    }
}

fn non_empty(name: &'static str, value: String) -> Result<String>
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GameError::EmptySetting { name });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String>
    {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set()
    {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn overrides_are_trimmed()
    {
        let settings = Settings::from_lookup(lookup_from(&[
            (DASHBOARD_VAR, " home.html "),
            (STORAGE_VAR, "/tmp/store"),
            (LOG_VAR, "/tmp/games.log"),
        ]))
        .unwrap();
        assert_eq!(settings.dashboard, "home.html");
        assert_eq!(settings.storage_path, PathBuf::from("/tmp/store"));
        assert_eq!(settings.log_path, Some(PathBuf::from("/tmp/games.log")));
    }

    #[test]
    fn empty_dashboard_is_rejected()
    {
        let err = Settings::from_lookup(lookup_from(&[(DASHBOARD_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, GameError::EmptySetting { name: DASHBOARD_VAR }));
    }

    #[test]
    fn blank_log_path_disables_logging()
    {
        let settings = Settings::from_lookup(lookup_from(&[(LOG_VAR, "")])).unwrap();
        assert!(settings.log_path.is_none());
    }
}
