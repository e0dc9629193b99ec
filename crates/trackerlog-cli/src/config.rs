//! Runtime configuration.
//!
//! Loaded from an optional YAML file, then overridden per field by
//! environment variables. Every field has a default, so a bare invocation
//! on the production host works without any file at all.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable names.
pub mod vars {
    pub const DATABASE: &str = "TRACKERLOG_DATABASE";
    pub const LOG_ROOT: &str = "TRACKERLOG_LOG_ROOT";
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Trackerlog runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerlogConfig {
    /// Path to the SQLite database holding the `trackersql` table.
    pub database_path: PathBuf,
    /// Base directory the year/month archive tree lives under.
    pub log_root: PathBuf,
}

impl Default for TrackerlogConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("trackerlog.db"),
            log_root: PathBuf::from("/home/sysadmin/khanzaLog"),
        }
    }
}

impl TrackerlogConfig {
    /// Load configuration: file (if given), then env overrides on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                serde_yaml::from_str(&text)?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(database) = env::var(vars::DATABASE) {
            self.database_path = PathBuf::from(database);
        }
        if let Ok(log_root) = env::var(vars::LOG_ROOT) {
            self.log_root = PathBuf::from(log_root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    // Process environment is shared across test threads; every test that
    // reads or writes TRACKERLOG_* takes this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard {
        var: &'static str,
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        fn set(var: &'static str, value: &str) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            env::set_var(var, value);
            Self { var, _lock: lock }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            env::remove_var(self.var);
        }
    }

    fn clean_env() -> MutexGuard<'static, ()> {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var(vars::DATABASE);
        env::remove_var(vars::LOG_ROOT);
        lock
    }

    #[test]
    fn defaults_cover_every_field() {
        let config = TrackerlogConfig::default();
        assert_eq!(config.database_path, PathBuf::from("trackerlog.db"));
        assert_eq!(config.log_root, PathBuf::from("/home/sysadmin/khanzaLog"));
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let _env = clean_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_root: /var/log/tracker").unwrap();

        let config = TrackerlogConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.log_root, PathBuf::from("/var/log/tracker"));
        assert_eq!(config.database_path, PathBuf::from("trackerlog.db"));
    }

    #[test]
    fn env_overrides_defaults() {
        let _database = EnvGuard::set(vars::DATABASE, "/srv/tracker/tracker.db");
        env::set_var(vars::LOG_ROOT, "/srv/tracker/logs");

        let config = TrackerlogConfig::load(None).unwrap();
        env::remove_var(vars::LOG_ROOT);

        assert_eq!(config.database_path, PathBuf::from("/srv/tracker/tracker.db"));
        assert_eq!(config.log_root, PathBuf::from("/srv/tracker/logs"));
    }

    #[test]
    fn env_overrides_file_values() {
        let _database = EnvGuard::set(vars::DATABASE, "/srv/override.db");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database_path: /etc/tracker/file.db").unwrap();
        writeln!(file, "log_root: /var/log/tracker").unwrap();

        let config = TrackerlogConfig::load(Some(file.path())).unwrap();

        // Env wins over the file; fields without an env var keep the file's
        // value.
        assert_eq!(config.database_path, PathBuf::from("/srv/override.db"));
        assert_eq!(config.log_root, PathBuf::from("/var/log/tracker"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = TrackerlogConfig::load(Some(Path::new("/nonexistent/config.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_root: [not, a, path").unwrap();

        let err = TrackerlogConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
