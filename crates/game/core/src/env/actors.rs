//! Actor templates and the oracle that serves them.
//!
//! Templates are loaded from data files and spawned into [`Combatant`]s at
//! battle start. Monsters are spawned with floor scaling applied to their
//! health, mana and armor; crit chance is never scaled.

use crate::config::ScalingRules;
use crate::state::{Combatant, StatusEffects};

/// Stat block for spawning a combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActorTemplate {
    pub id: String,
    pub name: String,
    pub health: u32,
    pub mana: u32,
    pub armor: u32,
    pub crit_chance: u32,
    pub primary_weapon: Option<String>,
    /// Action ids this actor may pick from.
    pub weapons: Vec<String>,
    pub abilities: Vec<String>,
    pub spells: Vec<String>,
}

impl ActorTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, health: u32, mana: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            health,
            mana,
            ..Self::default()
        }
    }

    pub fn with_armor(mut self, armor: u32) -> Self {
        self.armor = armor;
        self
    }

    pub fn with_crit_chance(mut self, crit_chance: u32) -> Self {
        self.crit_chance = crit_chance;
        self
    }

    pub fn with_weapon(mut self, weapon: impl Into<String>) -> Self {
        let weapon = weapon.into();
        if self.primary_weapon.is_none() {
            self.primary_weapon = Some(weapon.clone());
        }
        self.weapons.push(weapon);
        self
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push(ability.into());
        self
    }

    pub fn with_spell(mut self, spell: impl Into<String>) -> Self {
        self.spells.push(spell.into());
        self
    }

    /// Spawns an unscaled combatant at full health and mana.
    pub fn spawn(&self) -> Combatant {
        self.build(self.health, self.mana, self.armor)
    }

    /// Spawns a combatant with health, mana and armor scaled for `floor`.
    pub fn spawn_scaled(&self, floor: u32, rules: &ScalingRules) -> Combatant {
        let factor = rules.factor(floor);
        self.build(
            factor.apply(self.health),
            factor.apply(self.mana),
            factor.apply(self.armor),
        )
    }

    fn build(&self, health: u32, mana: u32, armor: u32) -> Combatant {
        let mut combatant = Combatant::new(self.name.clone(), health, mana, armor)
            .with_crit_chance(self.crit_chance)
            .with_status_effects(StatusEffects::empty());
        combatant.primary_weapon = self.primary_weapon.clone();
        combatant
    }
}

/// Serves actor templates by id.
pub trait ActorOracle: Send + Sync {
    fn template(&self, id: &str) -> Option<&ActorTemplate>;

    /// Ids of every template, in a stable order.
    fn template_ids(&self) -> Vec<String>;
}
