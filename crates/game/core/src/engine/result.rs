//! Output of one turn resolution.

use crate::combat::{CombatModifiers, CounterKind, DamageCategory};
use crate::env::ExpiryTransition;
use crate::state::{Side, StatusEffects};

/// Everything one side should apply after a turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideDelta {
    /// Damage this side receives.
    pub damage: u32,
    pub mana_cost: u32,
    pub healing: u32,
    pub mana_restore: u32,
    /// Post-turn status effect set; replaces the stored set.
    pub status_effects: StatusEffects,
    /// Modifiers in force after the tick, for presentation.
    pub modifiers: CombatModifiers,
    pub death_prevention_triggered: bool,
}

/// A damage effect that a counter cancelled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Negation {
    pub attacker: Side,
    pub counter: CounterKind,
    pub category: DamageCategory,
    /// Raw damage that would have been dealt.
    pub amount: u32,
}

/// End-of-effect instruction for the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub side: Side,
    /// Status effect that expired.
    pub effect: String,
    pub kind: ExpiryTransition,
}

impl Transition {
    pub fn new(side: Side, effect: impl Into<String>, kind: ExpiryTransition) -> Self {
        Self {
            side,
            effect: effect.into(),
            kind,
        }
    }
}

/// Aggregated outcome of one simultaneous turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResult {
    pub player: SideDelta,
    pub monster: SideDelta,
    pub critical_hits: Vec<String>,
    pub messages: Vec<String>,
    pub negations: Vec<Negation>,
    pub transitions: Vec<Transition>,
}

impl TurnResult {
    pub fn side(&self, side: Side) -> &SideDelta {
        match side {
            Side::Player => &self.player,
            Side::Monster => &self.monster,
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut SideDelta {
        match side {
            Side::Player => &mut self.player,
            Side::Monster => &mut self.monster,
        }
    }

    pub fn player_damage(&self) -> u32 {
        self.player.damage
    }

    pub fn monster_damage(&self) -> u32 {
        self.monster.damage
    }

    pub fn player_healing(&self) -> u32 {
        self.player.healing
    }

    pub fn monster_healing(&self) -> u32 {
        self.monster.healing
    }

    pub fn player_mana_cost(&self) -> u32 {
        self.player.mana_cost
    }

    pub fn monster_mana_cost(&self) -> u32 {
        self.monster.mana_cost
    }

    pub fn player_mana_restore(&self) -> u32 {
        self.player.mana_restore
    }

    pub fn monster_mana_restore(&self) -> u32 {
        self.monster.mana_restore
    }

    /// Transitions addressed to `side`.
    pub fn transitions_for(&self, side: Side) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.side == side)
    }
}
