//! Content loaders for reading combat data from files.
//!
//! Every loader has a `load(path)` entry point for files on disk and a
//! `parse(source)` entry point for text already in memory (used for the
//! embedded copies shipped with the crate).

pub mod actors;
pub mod config;
pub mod factory;
pub mod tables;

pub use actors::{ActorCatalog, ActorLoader};
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use tables::{
    AbilityCatalog, SpellCatalog, StatusEffectCatalog, TableSources, TablesLoader, WeaponCatalog,
};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Parses a RON document, naming `what` in the error.
pub(crate) fn parse_ron<T: serde::de::DeserializeOwned>(source: &str, what: &str) -> LoadResult<T> {
    ron::from_str(source).with_context(|| format!("Failed to parse {what} RON"))
}
