use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::ConfigError;

/// Optional `f1flat.toml` settings. Every key may be omitted.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub csv_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub progress_every: Option<u64>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn csv_dir(&self) -> PathBuf {
        self.csv_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CSV_DIR))
    }

    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_OUTPUT_PATH))
    }

    pub fn progress_every(&self) -> u64 {
        self.progress_every
            .unwrap_or(constants::DEFAULT_PROGRESS_EVERY)
    }
}
