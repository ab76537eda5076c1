//! Counter resolution: defensive declarations become per-turn counters.

use crate::action::{Effect, EffectKind};
use crate::state::Side;

use super::damage::{CategorySet, DamageCategory};

/// Defensive abilities, keyed by their ability id.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CounterKind {
    /// Negates all weapon damage.
    ShieldBlock,
    /// Negates melee damage and strikes back.
    Riposte,
    /// Negates magic damage.
    SpellWard,
    /// Negates magic damage and redirects part of it.
    Reflect,
    /// Negates weapon damage and heals, more against ranged attacks.
    Dodge,
}

impl CounterKind {
    pub const DODGE_HEAL_MELEE: u32 = 2;
    pub const DODGE_HEAL_RANGED: u32 = 3;

    /// Maps an ability id to its counter, if the ability is defensive.
    pub fn from_ability_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    pub fn ability_id(self) -> &'static str {
        self.into()
    }

    pub const fn negates(self) -> CategorySet {
        match self {
            Self::ShieldBlock | Self::Dodge => CategorySet::WEAPON,
            Self::Riposte => CategorySet::MELEE,
            Self::SpellWard | Self::Reflect => CategorySet::MAGIC,
        }
    }

    /// Damage dealt back to an attacker whose hit was negated.
    pub const fn counter_damage(self) -> u32 {
        match self {
            Self::Riposte => 2,
            Self::Reflect => 3,
            Self::ShieldBlock | Self::SpellWard | Self::Dodge => 0,
        }
    }

    pub const fn heals(self) -> bool {
        matches!(self, Self::Dodge)
    }
}

/// A defensive counter active for one side this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    pub owner: Side,
    pub kind: CounterKind,
    pub negates: CategorySet,
    pub counter_damage: u32,
    /// Set by the resolver once this counter negates a hit.
    pub triggered: bool,
}

impl Counter {
    pub fn new(owner: Side, kind: CounterKind) -> Self {
        Self {
            owner,
            kind,
            negates: kind.negates(),
            counter_damage: kind.counter_damage(),
            triggered: false,
        }
    }

    pub fn negates_category(&self, category: DamageCategory) -> bool {
        self.negates.covers(category)
    }
}

/// Collects the counters `side` declared among `effects`.
pub fn counters(effects: &[Effect], side: Side) -> Vec<Counter> {
    effects
        .iter()
        .filter(|effect| effect.source == side)
        .filter_map(|effect| match effect.kind {
            EffectKind::Defensive(kind) => Some(Counter::new(side, kind)),
            _ => None,
        })
        .collect()
}

/// Heal granted by a dodge, chosen from the opponent's generated effects:
/// the ranged amount if any of them is ranged damage, otherwise the melee
/// amount.
pub fn dodge_heal(opponent_effects: &[Effect]) -> u32 {
    let dodged_ranged = opponent_effects.iter().any(|effect| {
        matches!(
            effect.kind,
            EffectKind::Damage {
                category: DamageCategory::Ranged,
                ..
            }
        )
    });
    if dodged_ranged {
        CounterKind::DODGE_HEAL_RANGED
    } else {
        CounterKind::DODGE_HEAL_MELEE
    }
}
