//! In-memory oracle implementations.
//!
//! Snapshots own the loaded data tables and implement the oracle traits
//! directly. They are immutable after construction, so one snapshot behind an
//! `Arc` can serve any number of concurrently running battles.

use std::collections::BTreeMap;

use super::actors::{ActorOracle, ActorTemplate};
use super::status::StatusEffectDefinition;
use super::tables::{AbilityDefinition, SpellDefinition, TablesOracle, WeaponDefinition};

// ============================================================================
// Tables
// ============================================================================

/// Weapon, ability, spell and status effect tables keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TablesSnapshot {
    pub weapons: BTreeMap<String, WeaponDefinition>,
    pub abilities: BTreeMap<String, AbilityDefinition>,
    pub spells: BTreeMap<String, SpellDefinition>,
    pub status_effects: BTreeMap<String, StatusEffectDefinition>,
}

impl TablesSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weapon(mut self, weapon: WeaponDefinition) -> Self {
        self.insert_weapon(weapon);
        self
    }

    pub fn with_ability(mut self, ability: AbilityDefinition) -> Self {
        self.insert_ability(ability);
        self
    }

    pub fn with_spell(mut self, spell: SpellDefinition) -> Self {
        self.insert_spell(spell);
        self
    }

    pub fn with_status_effect(mut self, effect: StatusEffectDefinition) -> Self {
        self.insert_status_effect(effect);
        self
    }

    pub fn insert_weapon(&mut self, weapon: WeaponDefinition) {
        self.weapons.insert(weapon.id.clone(), weapon);
    }

    pub fn insert_ability(&mut self, ability: AbilityDefinition) {
        self.abilities.insert(ability.id.clone(), ability);
    }

    pub fn insert_spell(&mut self, spell: SpellDefinition) {
        self.spells.insert(spell.id.clone(), spell);
    }

    pub fn insert_status_effect(&mut self, effect: StatusEffectDefinition) {
        self.status_effects.insert(effect.id.clone(), effect);
    }

    /// Status effect ids referenced by weapons, abilities and spells that
    /// have no definition, as `(owner id, effect id)` pairs.
    pub fn dangling_status_references(&self) -> Vec<(String, String)> {
        let weapons = self
            .weapons
            .values()
            .flat_map(|w| w.status_effects.iter().map(move |roll| (&w.id, roll)));
        let abilities = self
            .abilities
            .values()
            .flat_map(|a| a.status_effects.iter().map(move |roll| (&a.id, roll)));
        let spells = self
            .spells
            .values()
            .flat_map(|s| s.status_effects.iter().map(move |roll| (&s.id, roll)));

        weapons
            .chain(abilities)
            .chain(spells)
            .filter(|(_, roll)| !self.status_effects.contains_key(&roll.effect))
            .map(|(owner, roll)| (owner.clone(), roll.effect.clone()))
            .collect()
    }
}

impl TablesOracle for TablesSnapshot {
    fn weapon(&self, id: &str) -> Option<&WeaponDefinition> {
        self.weapons.get(id)
    }

    fn ability(&self, id: &str) -> Option<&AbilityDefinition> {
        self.abilities.get(id)
    }

    fn spell(&self, id: &str) -> Option<&SpellDefinition> {
        self.spells.get(id)
    }

    fn status_effect(&self, id: &str) -> Option<&StatusEffectDefinition> {
        self.status_effects.get(id)
    }
}

// ============================================================================
// Actors
// ============================================================================

/// Actor templates keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorsSnapshot {
    pub templates: BTreeMap<String, ActorTemplate>,
}

impl ActorsSnapshot {
    pub fn new(templates: impl IntoIterator<Item = ActorTemplate>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|template| (template.id.clone(), template))
                .collect(),
        }
    }
}

impl ActorOracle for ActorsSnapshot {
    fn template(&self, id: &str) -> Option<&ActorTemplate> {
        self.templates.get(id)
    }

    fn template_ids(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }
}
