//! Data-driven combat content and loaders.
//!
//! This crate houses the static combat data and provides loaders for RON/TOML
//! data files:
//! - Weapon, ability, spell and status effect tables (RON)
//! - Actor templates for the hero and monsters (RON)
//! - Combat configuration (TOML)
//!
//! Loaders produce the `combat-core` snapshot types directly, which implement
//! the oracle traits the engine reads. Content never appears in battle state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ConfigLoader, Content, ContentFactory, LoadResult, TableSources, TablesLoader,
};
