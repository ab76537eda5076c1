//! Weapon, ability, spell and status effect table loaders.

use std::path::Path;

use combat_core::{
    AbilityDefinition, SpellDefinition, StatusEffectDefinition, TablesSnapshot, WeaponDefinition,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<WeaponDefinition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilityCatalog {
    pub abilities: Vec<AbilityDefinition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<SpellDefinition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffectCatalog {
    pub status_effects: Vec<StatusEffectDefinition>,
}

/// Sources of the four table files.
#[derive(Debug, Clone, Copy)]
pub struct TableSources<'a> {
    pub weapons: &'a str,
    pub abilities: &'a str,
    pub spells: &'a str,
    pub status_effects: &'a str,
}

/// Loader for the combat data tables.
pub struct TablesLoader;

impl TablesLoader {
    /// Load all four tables from a data directory.
    ///
    /// Expects `weapons.ron`, `abilities.ron`, `spells.ron` and
    /// `status_effects.ron` in `dir`.
    pub fn load(dir: &Path) -> LoadResult<TablesSnapshot> {
        let weapons = read_file(&dir.join("weapons.ron"))?;
        let abilities = read_file(&dir.join("abilities.ron"))?;
        let spells = read_file(&dir.join("spells.ron"))?;
        let status_effects = read_file(&dir.join("status_effects.ron"))?;

        Self::parse(TableSources {
            weapons: &weapons,
            abilities: &abilities,
            spells: &spells,
            status_effects: &status_effects,
        })
    }

    /// Build a snapshot from table sources already in memory.
    ///
    /// Duplicate ids are resolved in favour of the last definition.
    pub fn parse(sources: TableSources<'_>) -> LoadResult<TablesSnapshot> {
        let weapons: WeaponCatalog = parse_ron(sources.weapons, "weapon catalog")?;
        let abilities: AbilityCatalog = parse_ron(sources.abilities, "ability catalog")?;
        let spells: SpellCatalog = parse_ron(sources.spells, "spell catalog")?;
        let status_effects: StatusEffectCatalog =
            parse_ron(sources.status_effects, "status effect catalog")?;

        let mut tables = TablesSnapshot::new();
        weapons
            .weapons
            .into_iter()
            .for_each(|weapon| tables.insert_weapon(weapon));
        abilities
            .abilities
            .into_iter()
            .for_each(|ability| tables.insert_ability(ability));
        spells
            .spells
            .into_iter()
            .for_each(|spell| tables.insert_spell(spell));
        status_effects
            .status_effects
            .into_iter()
            .for_each(|effect| tables.insert_status_effect(effect));

        tracing::debug!(
            weapons = tables.weapons.len(),
            abilities = tables.abilities.len(),
            spells = tables.spells.len(),
            status_effects = tables.status_effects.len(),
            "loaded combat tables"
        );
        Ok(tables)
    }
}
