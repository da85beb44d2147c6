use std::fs;
use std::path::{Path, PathBuf};

use crate::{Config, ConfigError, ConfigOverrides};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// On-disk home of the persisted configuration
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(CONFIG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// No config has been persisted yet
    pub fn is_first_run(&self) -> bool {
        !self.path.exists()
    }

    /// Load the stored config, `None` on first run
    pub fn load(&self) -> Result<Option<Config>, ConfigError> {
        if self.is_first_run() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(config))
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let data = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, data).map_err(io_err)?;

        tracing::debug!("Saved config to {}", self.path.display());
        Ok(())
    }

    /// Load, apply command-line overrides, validate and persist the result
    pub fn load_and_merge(&self, overrides: ConfigOverrides) -> Result<Config, ConfigError> {
        let mut config = match self.load()? {
            Some(config) => {
                tracing::info!("Loaded config from {}", self.path.display());
                config
            }
            None => {
                tracing::info!("No config at {}, starting fresh", self.path.display());
                Config::default()
            }
        };

        overrides.apply(&mut config);
        config.validate()?;
        self.save(&config)?;

        Ok(config)
    }
}
