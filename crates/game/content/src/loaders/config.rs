//! Combat configuration loader.

use std::path::Path;

use anyhow::Context;
use combat_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections fall back to the built-in defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(source: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(source).context("Failed to parse config TOML")?;
        if config.scaling.max_floor == 0 {
            anyhow::bail!("scaling.max_floor must be at least 1");
        }
        Ok(config)
    }
}
