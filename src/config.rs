//! Store configuration, read from TOML.
//!
//! ```toml
//! emit_changes = true
//!
//! [seed]
//! source = "file"
//! path = "seed.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SeedError};
use crate::seed::SeedData;

/// Where the initial records come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    #[default]
    Builtin,
    Empty,
    File,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub source: SeedSource,
    /// JSON seed file, required when `source = "file"`. Relative paths are
    /// resolved against the config file's directory when loaded via
    /// [`StoreConfig::from_path`].
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Publish change notices after mutations.
    pub emit_changes: bool,
    pub seed: SeedConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            emit_changes: true,
            seed: SeedConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(toml)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;

        if let (Some(seed_path), Some(dir)) = (config.seed.path.as_mut(), path.parent()) {
            if seed_path.is_relative() {
                *seed_path = dir.join(&*seed_path);
            }
        }
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.seed.source == SeedSource::File && self.seed.path.is_none() {
            return Err(ConfigError::MissingSeedPath);
        }
        Ok(())
    }

    /// Load the seed this configuration points at.
    pub fn load_seed(&self) -> Result<SeedData, SeedError> {
        match (self.seed.source, &self.seed.path) {
            (SeedSource::Builtin, _) => Ok(SeedData::builtin()),
            (SeedSource::Empty, _) => Ok(SeedData::empty()),
            (SeedSource::File, Some(path)) => SeedData::from_path(path),
            // Unreachable for checked configs; treat as no seed.
            (SeedSource::File, None) => Ok(SeedData::empty()),
        }
    }
}
