//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve database path and logging settings for host entry points.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never fails; unset values fall back to defaults.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "QUICKNOTE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "QUICKNOTE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "QUICKNOTE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "quicknote.sqlite3";

/// Settings shared by the FFI and CLI entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    /// Log level passed to `init_logging`.
    pub log_level: String,
    /// Log directory; logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an injected variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Default database location under the OS temp directory.
pub fn default_db_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{default_db_path, CoreConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = CoreConfig::default();
        assert_eq!(config.db_path, default_db_path());
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_trimmed_and_used() {
        let config = CoreConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, " /data/notes.db "),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, "/var/log/quicknote"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/data/notes.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/quicknote")));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            CoreConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "   "), (LOG_DIR_ENV, "")]));
        assert_eq!(config.db_path, default_db_path());
        assert_eq!(config.log_dir, None);
    }
}
