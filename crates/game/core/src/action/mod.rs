//! Actions chosen by combatants and the effects generated from them.
//!
//! An [`Action`] names one weapon, ability, or spell by data-table id. The
//! [`generate`] stage expands it into primitive [`Effect`] records which the
//! resolver then nets against the opponent's effects.
mod effect;
mod generate;

pub use effect::{Effect, EffectKind, StatusApplication};
pub use generate::{GenerateContext, generate};

/// Kind of action, without the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Weapon,
    Ability,
    Spell,
}

/// A single chosen weapon, ability, or spell use for one turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "id", rename_all = "lowercase"))]
pub enum Action {
    Weapon(String),
    Ability(String),
    Spell(String),
}

impl Action {
    pub fn weapon(id: impl Into<String>) -> Self {
        Self::Weapon(id.into())
    }

    pub fn ability(id: impl Into<String>) -> Self {
        Self::Ability(id.into())
    }

    pub fn spell(id: impl Into<String>) -> Self {
        Self::Spell(id.into())
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Weapon(id) | Self::Ability(id) | Self::Spell(id) => id,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Weapon(_) => ActionKind::Weapon,
            Self::Ability(_) => ActionKind::Ability,
            Self::Spell(_) => ActionKind::Spell,
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id())
    }
}
