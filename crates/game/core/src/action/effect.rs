//! Primitive per-turn effects.
//!
//! Effects are ephemeral: generated fresh each turn, consumed by the
//! resolver, never persisted. Every effect records which side produced it and
//! which side it lands on.

use crate::combat::{CounterKind, DamageCategory};
use crate::state::{Duration, Side};

/// A status effect to be applied to `Effect::target`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusApplication {
    /// Status effect definition id.
    pub effect: String,
    /// Overrides the definition's duration when set.
    pub duration: Option<Duration>,
    pub power: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// Damage to the target, subject to negation and armor.
    Damage {
        amount: u32,
        category: DamageCategory,
        ignores_armor: bool,
        /// Display name of the weapon, ability, or spell.
        label: String,
    },
    /// Health paid by the source itself. Never negated.
    SelfDamage { amount: u32 },
    ManaCost { amount: u32 },
    Healing { amount: u32 },
    /// Marker for a critical weapon hit.
    CriticalHit { label: String },
    Status(StatusApplication),
    /// Defensive declaration; becomes a counter for this turn.
    Defensive(CounterKind),
    /// One-shot death prevention declaration.
    DeathPrevention { heal: u32, mana_restore: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub source: Side,
    pub target: Side,
    pub kind: EffectKind,
}

impl Effect {
    pub fn damage(
        source: Side,
        amount: u32,
        category: DamageCategory,
        ignores_armor: bool,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source,
            target: source.opponent(),
            kind: EffectKind::Damage {
                amount,
                category,
                ignores_armor,
                label: label.into(),
            },
        }
    }

    pub fn self_damage(source: Side, amount: u32) -> Self {
        Self::on_self(source, EffectKind::SelfDamage { amount })
    }

    pub fn mana_cost(source: Side, amount: u32) -> Self {
        Self::on_self(source, EffectKind::ManaCost { amount })
    }

    pub fn healing(source: Side, amount: u32) -> Self {
        Self::on_self(source, EffectKind::Healing { amount })
    }

    pub fn critical_hit(source: Side, label: impl Into<String>) -> Self {
        Self {
            source,
            target: source.opponent(),
            kind: EffectKind::CriticalHit {
                label: label.into(),
            },
        }
    }

    pub fn status(source: Side, target: Side, application: StatusApplication) -> Self {
        Self {
            source,
            target,
            kind: EffectKind::Status(application),
        }
    }

    pub fn defensive(source: Side, counter: CounterKind) -> Self {
        Self::on_self(source, EffectKind::Defensive(counter))
    }

    pub fn death_prevention(source: Side, heal: u32, mana_restore: u32) -> Self {
        Self::on_self(source, EffectKind::DeathPrevention { heal, mana_restore })
    }

    fn on_self(source: Side, kind: EffectKind) -> Self {
        Self {
            source,
            target: source,
            kind,
        }
    }
}
