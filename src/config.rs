use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "HOMELEDGER_DATA_DIR";
pub const LOG_ENV: &str = "HOMELEDGER_LOG";
const DEFAULT_LOG_FILTER: &str = "homeledger=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub database_file: String,
    pub log_filter: String,
}

impl Config {
    /// Resolve from the environment, falling back to the platform data
    /// directory. Creates the data directory.
    pub fn from_env() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        let log_filter =
            std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        let config = Self::with_data_dir(data_dir).with_log_filter(log_filter);
        std::fs::create_dir_all(&config.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                config.data_dir.display()
            )
        })?;
        Ok(config)
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_file: "homeledger.db".into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "homeledger", "HomeLedger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path() {
        let config = Config::with_data_dir("/tmp/ledger");
        assert_eq!(config.database_path(), PathBuf::from("/tmp/ledger/homeledger.db"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_filter_override() {
        let config = Config::with_data_dir("/tmp/ledger").with_log_filter("homeledger=debug");
        assert_eq!(config.log_filter, "homeledger=debug");
    }
}
