//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use combat_core::{ActorOracle, ActorsSnapshot, GameConfig, TablesOracle, TablesSnapshot};

use crate::loaders::{ActorLoader, ConfigLoader, LoadResult, TableSources, TablesLoader};

mod embedded {
    pub const WEAPONS: &str = include_str!("../../data/weapons.ron");
    pub const ABILITIES: &str = include_str!("../../data/abilities.ron");
    pub const SPELLS: &str = include_str!("../../data/spells.ron");
    pub const STATUS_EFFECTS: &str = include_str!("../../data/status_effects.ron");
    pub const ACTORS: &str = include_str!("../../data/actors.ron");
    pub const CONFIG: &str = include_str!("../../data/config.toml");
}

/// Everything a battle needs from static content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub tables: TablesSnapshot,
    pub actors: ActorsSnapshot,
    pub config: GameConfig,
}

impl Content {
    /// Cross-reference problems in the loaded content, one line each.
    ///
    /// Reports status effects referenced but not defined, and actor
    /// templates naming weapons, abilities or spells the tables lack.
    pub fn problems(&self) -> Vec<String> {
        let mut problems: Vec<String> = self
            .tables
            .dangling_status_references()
            .into_iter()
            .map(|(owner, effect)| format!("'{owner}' inflicts unknown status effect '{effect}'"))
            .collect();

        for id in self.actors.template_ids() {
            let Some(template) = self.actors.template(&id) else {
                continue;
            };
            let primary = template
                .primary_weapon
                .iter()
                .filter(|p| !template.weapons.contains(p));
            let unknown_weapons = template
                .weapons
                .iter()
                .chain(primary)
                .filter(|w| self.tables.weapon(w).is_none())
                .map(|w| ("weapon", w));
            let unknown_abilities = template
                .abilities
                .iter()
                .filter(|a| self.tables.ability(a).is_none())
                .map(|a| ("ability", a));
            let unknown_spells = template
                .spells
                .iter()
                .filter(|s| self.tables.spell(s).is_none())
                .map(|s| ("spell", s));

            problems.extend(
                unknown_weapons
                    .chain(unknown_abilities)
                    .chain(unknown_spells)
                    .map(|(kind, name)| format!("actor '{id}' uses unknown {kind} '{name}'")),
            );
        }

        problems
    }
}

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── weapons.ron
/// ├── abilities.ron
/// ├── spells.ron
/// ├── status_effects.ron
/// └── actors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Parses the content compiled into this crate.
    pub fn embedded() -> LoadResult<Content> {
        Ok(Content {
            tables: TablesLoader::parse(TableSources {
                weapons: embedded::WEAPONS,
                abilities: embedded::ABILITIES,
                spells: embedded::SPELLS,
                status_effects: embedded::STATUS_EFFECTS,
            })?,
            actors: ActorLoader::parse(embedded::ACTORS)?,
            config: ConfigLoader::parse(embedded::CONFIG)?,
        })
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the weapon, ability, spell and status effect tables.
    pub fn load_tables(&self) -> LoadResult<TablesSnapshot> {
        TablesLoader::load(&self.data_dir)
    }

    /// Load actor templates from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<ActorsSnapshot> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load everything in the data directory.
    pub fn load(&self) -> LoadResult<Content> {
        Ok(Content {
            tables: self.load_tables()?,
            actors: self.load_actors()?,
            config: self.load_config()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
