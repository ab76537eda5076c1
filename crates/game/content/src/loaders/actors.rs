//! Actor catalog loader.

use std::path::Path;

use combat_core::{ActorTemplate, ActorsSnapshot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Actor catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorCatalog {
    pub actors: Vec<ActorTemplate>,
}

/// Loader for actor templates from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor templates from a RON file.
    pub fn load(path: &Path) -> LoadResult<ActorsSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(source: &str) -> LoadResult<ActorsSnapshot> {
        let catalog: ActorCatalog = parse_ron(source, "actor catalog")?;
        for template in &catalog.actors {
            if template.health == 0 {
                anyhow::bail!("Actor '{}' has zero health", template.id);
            }
            if template.crit_chance > 100 {
                anyhow::bail!(
                    "Actor '{}' has crit chance {} above 100",
                    template.id,
                    template.crit_chance
                );
            }
        }
        Ok(ActorsSnapshot::new(catalog.actors))
    }
}
