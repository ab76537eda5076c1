use std::borrow::Cow;

use crate::combat::DamageCategory;
use crate::config::GameConfig;
use crate::state::Duration;

use super::status::StatusEffectDefinition;

/// Oracle providing the static combat data tables.
///
/// Lookups by id return `None` when the id is unknown. Callers inside the
/// engine go through the `*_or_fallback` methods, which make every lookup
/// total: a missing weapon, ability or spell degrades to a minimal stand-in
/// definition and logs a data-integrity warning. Unknown status effects are
/// treated as absent.
pub trait TablesOracle: Send + Sync {
    fn weapon(&self, id: &str) -> Option<&WeaponDefinition>;
    fn ability(&self, id: &str) -> Option<&AbilityDefinition>;
    fn spell(&self, id: &str) -> Option<&SpellDefinition>;
    fn status_effect(&self, id: &str) -> Option<&StatusEffectDefinition>;

    fn weapon_or_fallback(&self, id: &str) -> Cow<'_, WeaponDefinition> {
        match self.weapon(id) {
            Some(weapon) => Cow::Borrowed(weapon),
            None => {
                tracing::warn!(weapon = id, "unknown weapon id, using fallback weapon");
                Cow::Owned(WeaponDefinition::fallback(id))
            }
        }
    }

    fn ability_or_fallback(&self, id: &str) -> Cow<'_, AbilityDefinition> {
        match self.ability(id) {
            Some(ability) => Cow::Borrowed(ability),
            None => {
                tracing::warn!(ability = id, "unknown ability id, using fallback ability");
                Cow::Owned(AbilityDefinition::fallback(id))
            }
        }
    }

    fn spell_or_fallback(&self, id: &str) -> Cow<'_, SpellDefinition> {
        match self.spell(id) {
            Some(spell) => Cow::Borrowed(spell),
            None => {
                tracing::warn!(spell = id, "unknown spell id, using fallback spell");
                Cow::Owned(SpellDefinition::fallback(id))
            }
        }
    }
}

/// A status effect an action may inflict.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusRoll {
    /// Status effect definition id.
    pub effect: String,
    /// Overrides the definition's duration when set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<Duration>,
    #[cfg_attr(feature = "serde", serde(default = "default_power"))]
    pub power: u32,
    /// Percent chance (0-100) that the effect is applied.
    #[cfg_attr(feature = "serde", serde(default = "default_chance"))]
    pub chance: u32,
    /// Applied to the acting combatant instead of the opponent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_self: bool,
}

#[cfg(feature = "serde")]
fn default_power() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn default_chance() -> u32 {
    100
}

impl StatusRoll {
    /// An always-applied roll against the opponent with power 1.
    pub fn new(effect: impl Into<String>) -> Self {
        Self {
            effect: effect.into(),
            duration: None,
            power: 1,
            chance: 100,
            on_self: false,
        }
    }

    pub fn with_chance(mut self, chance: u32) -> Self {
        self.chance = chance;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    pub fn on_self(mut self) -> Self {
        self.on_self = true;
        self
    }

    pub fn is_guaranteed(&self) -> bool {
        self.chance >= 100
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponDefinition {
    pub id: String,
    pub name: String,
    /// Base damage before floor scaling.
    pub damage: u32,
    pub category: DamageCategory,
    pub ignores_armor: bool,
    /// Health paid by the wielder on every swing.
    pub health_cost: u32,
    pub status_effects: Vec<StatusRoll>,
}

impl WeaponDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        damage: u32,
        category: DamageCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            damage,
            category,
            ..Self::default()
        }
    }

    pub fn fallback(id: &str) -> Self {
        Self::new(id, id, GameConfig::FALLBACK_WEAPON_DAMAGE, DamageCategory::Melee)
    }
}

impl Default for WeaponDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            damage: 0,
            category: DamageCategory::Melee,
            ignores_armor: false,
            health_cost: 0,
            status_effects: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityDefinition {
    pub id: String,
    pub name: String,
    pub damage: u32,
    pub category: DamageCategory,
    pub ignores_armor: bool,
    /// Health restored to the user.
    pub healing: u32,
    pub mana_cost: u32,
    /// The user pays `GameConfig::ABILITY_SELF_DAMAGE` health.
    pub self_damage: bool,
    /// Whether `damage` grows with the floor scaling factor.
    pub scales_with_floor: bool,
    pub status_effects: Vec<StatusRoll>,
}

impl AbilityDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn fallback(id: &str) -> Self {
        Self {
            damage: GameConfig::FALLBACK_ABILITY_DAMAGE,
            ..Self::new(id, id)
        }
    }
}

impl Default for AbilityDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            damage: 0,
            category: DamageCategory::Melee,
            ignores_armor: false,
            healing: 0,
            mana_cost: 0,
            self_damage: false,
            scales_with_floor: false,
            status_effects: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellDefinition {
    pub id: String,
    pub name: String,
    pub damage: u32,
    pub mana_cost: u32,
    pub health_cost: u32,
    /// Flat healing to the caster.
    pub healing: u32,
    pub ignores_armor: bool,
    /// Each entry rolls its own chance.
    pub status_effects: Vec<StatusRoll>,
}

impl SpellDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, damage: u32, mana_cost: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            damage,
            mana_cost,
            ..Self::default()
        }
    }

    pub fn fallback(id: &str) -> Self {
        Self::new(id, id, GameConfig::FALLBACK_SPELL_DAMAGE, 0)
    }
}
