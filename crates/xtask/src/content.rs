//! Content loading shared by xtask commands

use std::path::Path;

use anyhow::{Context, Result};
use combat_content::{Content, ContentFactory};

/// Loads content from `data_dir`, or the copy embedded in `combat-content`.
pub fn load(data_dir: Option<&Path>) -> Result<Content> {
    match data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load()
            .with_context(|| format!("Failed to load content from {}", dir.display())),
        None => ContentFactory::embedded().context("Failed to parse embedded content"),
    }
}

/// Human-readable origin of the content, for headers.
pub fn origin(data_dir: Option<&Path>) -> String {
    data_dir.map_or_else(|| "embedded".to_string(), |dir| dir.display().to_string())
}
