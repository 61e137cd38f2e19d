//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] over a single JSON document on disk.  A
//! missing file means "first run" and yields defaults; anything that
//! exists must parse and validate, or loading fails.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::SystemConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No config at {}, using defaults", self.path.display());
                return Ok(SystemConfig::default());
            }
            Err(e) => {
                warn!("Config read failed ({}): {}", self.path.display(), e);
                return Err(ConfigError::IoError);
            }
        };
        let config: SystemConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("Config parse failed ({}): {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let text = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        // Readers only ever see a complete file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, text).map_err(|_| ConfigError::IoError)?;
        std::fs::rename(&tmp, &self.path).map_err(|_| ConfigError::IoError)?;
        info!("Config saved to {}", self.path.display());
        Ok(())
    }
}
