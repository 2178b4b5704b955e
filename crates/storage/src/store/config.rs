#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const STORAGE_DIR_ENV: &str = "SUBWAY_STORAGE_DIR";
pub const BUSY_TIMEOUT_ENV: &str = "SUBWAY_BUSY_TIMEOUT_MS";

const DEFAULT_DIR_NAME: &str = "subway";
const DEFAULT_DB_FILE: &str = "subway.db";
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_dir: PathBuf,
    pub db_file_name: String,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(storage_dir: impl AsRef<Path>) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
            db_file_name: DEFAULT_DB_FILE.to_string(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Storage dir from `SUBWAY_STORAGE_DIR`, then `XDG_STATE_HOME`, then
    /// `~/.local/state`, then the temp dir. Busy timeout from
    /// `SUBWAY_BUSY_TIMEOUT_MS` when it parses.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same resolution as [`StoreConfig::from_env`], reading variables
    /// through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| non_empty(lookup(name));
        let mut config = Self::new(default_storage_dir(&var));
        if let Some(timeout) = var(BUSY_TIMEOUT_ENV)
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_millis)
        {
            config.busy_timeout = timeout;
        }
        config
    }

    pub fn with_db_file_name(mut self, name: impl Into<String>) -> Self {
        self.db_file_name = name.into();
        self
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn db_path(&self) -> PathBuf {
        self.storage_dir.join(&self.db_file_name)
    }
}

fn default_storage_dir(var: &dyn Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = var(STORAGE_DIR_ENV) {
        return PathBuf::from(dir);
    }
    if let Some(dir) = var("XDG_STATE_HOME") {
        return PathBuf::from(dir).join(DEFAULT_DIR_NAME);
    }
    if let Some(home) = var("HOME") {
        return PathBuf::from(home)
            .join(".local/state")
            .join(DEFAULT_DIR_NAME);
    }
    std::env::temp_dir().join(DEFAULT_DIR_NAME)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = StoreConfig::new("/tmp/subway_cfg");
        assert_eq!(config.db_path(), PathBuf::from("/tmp/subway_cfg/subway.db"));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
    }

    #[test]
    fn builders_override_fields() {
        let config = StoreConfig::new("/tmp/subway_cfg")
            .with_db_file_name("lines.db")
            .with_busy_timeout(Duration::from_millis(250));
        assert_eq!(config.db_path(), PathBuf::from("/tmp/subway_cfg/lines.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn storage_dir_env_wins_over_fallbacks() {
        let config = StoreConfig::from_lookup(lookup(&[
            (STORAGE_DIR_ENV, " /srv/subway "),
            ("XDG_STATE_HOME", "/xdg"),
            ("HOME", "/home/rider"),
        ]));
        assert_eq!(config.storage_dir, PathBuf::from("/srv/subway"));
    }

    #[test]
    fn blank_values_fall_through_the_chain() {
        let config = StoreConfig::from_lookup(lookup(&[
            (STORAGE_DIR_ENV, "  "),
            ("XDG_STATE_HOME", "/xdg"),
            ("HOME", "/home/rider"),
        ]));
        assert_eq!(config.storage_dir, PathBuf::from("/xdg/subway"));

        let config =
            StoreConfig::from_lookup(lookup(&[("XDG_STATE_HOME", ""), ("HOME", "/home/rider")]));
        assert_eq!(
            config.storage_dir,
            PathBuf::from("/home/rider/.local/state/subway")
        );

        let config = StoreConfig::from_lookup(lookup(&[]));
        assert_eq!(config.storage_dir, std::env::temp_dir().join("subway"));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
    }

    #[test]
    fn busy_timeout_is_read_when_it_parses() {
        let config = StoreConfig::from_lookup(lookup(&[
            (STORAGE_DIR_ENV, "/srv/subway"),
            (BUSY_TIMEOUT_ENV, "750"),
        ]));
        assert_eq!(config.busy_timeout, Duration::from_millis(750));

        let config = StoreConfig::from_lookup(lookup(&[
            (STORAGE_DIR_ENV, "/srv/subway"),
            (BUSY_TIMEOUT_ENV, "soon"),
        ]));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
    }
}
