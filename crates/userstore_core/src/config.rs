//! Runtime configuration for the user store.
//!
//! # Responsibility
//! - Resolve the database file and logging settings from the environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - `log_dir` is resolved against a base directory, never left relative
//!   when the current directory is known.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

/// Database file used when `USERSTORE_DB_PATH` is unset.
pub const DEFAULT_DB_FILE_NAME: &str = "database.db";
pub const DB_PATH_ENV: &str = "USERSTORE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "USERSTORE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "USERSTORE_LOG_DIR";

const DEFAULT_LOG_DIR_NAME: &str = "logs";

/// Resolved settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite database file; relative paths are relative to the process cwd.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`; validated by `init_logging`.
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl StoreConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, resolving relative log directories
    /// against the current directory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve(lookup, &base_dir)
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>, base_dir: &Path) -> Self {
        let db_path = non_blank(lookup(DB_PATH_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));

        let log_level =
            non_blank(lookup(LOG_LEVEL_ENV)).unwrap_or_else(|| default_log_level().to_string());

        let log_dir = match non_blank(lookup(LOG_DIR_ENV)).map(PathBuf::from) {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => base_dir.join(dir),
            None => base_dir.join(DEFAULT_LOG_DIR_NAME),
        };

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DB_PATH_ENV, DEFAULT_DB_FILE_NAME, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let base = Path::new("/srv/userstore");
        let config = StoreConfig::resolve(lookup_from(&[]), base);

        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, base.join("logs"));
    }

    #[test]
    fn environment_values_override_defaults() {
        let base = Path::new("/srv/userstore");
        let config = StoreConfig::resolve(
            lookup_from(&[
                (DB_PATH_ENV, "/data/users.sqlite3"),
                (LOG_LEVEL_ENV, "warn"),
                (LOG_DIR_ENV, "var/log"),
            ]),
            base,
        );

        assert_eq!(config.db_path, PathBuf::from("/data/users.sqlite3"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, base.join("var/log"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let base = Path::new("/srv/userstore");
        let config = StoreConfig::resolve(
            lookup_from(&[(DB_PATH_ENV, "   "), (LOG_LEVEL_ENV, "")]),
            base,
        );

        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn from_lookup_produces_absolute_log_dir() {
        let config = StoreConfig::from_lookup(|_| None);
        assert!(config.log_dir.is_absolute());
    }
}
