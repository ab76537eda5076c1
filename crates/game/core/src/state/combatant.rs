//! Combatant records owned by the caller.

use crate::engine::{SideDelta, Transition};
use crate::env::ExpiryTransition;
use crate::error::{CombatError, InvariantViolation};

use super::status::StatusEffects;

/// One of the two parties in a battle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Monster,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Monster,
            Self::Monster => Self::Player,
        }
    }

    /// Stable small integer for RNG seed mixing.
    pub const fn index(self) -> u32 {
        match self {
            Self::Player => 0,
            Self::Monster => 1,
        }
    }
}

/// A player avatar or monster instance participating in a battle.
///
/// The engine only reads combatants. All changes flow through
/// [`Combatant::apply_delta`] and [`Combatant::apply_transition`], which the
/// caller invokes with the values returned from a turn resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub current_health: u32,
    pub max_health: u32,
    pub current_mana: u32,
    pub max_mana: u32,
    pub armor: u32,
    /// Percent chance (0-100) that a weapon hit is critical.
    pub crit_chance: u32,
    /// Weapon id affected by `DISABLE_PRIMARY_WEAPON`.
    pub primary_weapon: Option<String>,
    pub status_effects: StatusEffects,
    pub death_prevention_used: bool,
}

impl Combatant {
    /// Creates a combatant at full health and mana with no effects.
    pub fn new(name: impl Into<String>, max_health: u32, max_mana: u32, armor: u32) -> Self {
        Self {
            name: name.into(),
            current_health: max_health,
            max_health,
            current_mana: max_mana,
            max_mana,
            armor,
            crit_chance: 0,
            primary_weapon: None,
            status_effects: StatusEffects::empty(),
            death_prevention_used: false,
        }
    }

    pub fn with_crit_chance(mut self, crit_chance: u32) -> Self {
        self.crit_chance = crit_chance;
        self
    }

    pub fn with_primary_weapon(mut self, weapon: impl Into<String>) -> Self {
        self.primary_weapon = Some(weapon.into());
        self
    }

    pub fn with_health(mut self, current_health: u32) -> Self {
        self.current_health = current_health;
        self
    }

    pub fn with_status_effects(mut self, status_effects: StatusEffects) -> Self {
        self.status_effects = status_effects;
        self
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }

    /// Checks the numeric invariants the resolver relies on.
    ///
    /// # Errors
    ///
    /// Returns `CombatError::InvalidCombatant` naming the first broken invariant.
    pub fn validate(&self, side: Side) -> Result<(), CombatError> {
        let violation = if self.max_health == 0 {
            Some(InvariantViolation::ZeroMaxHealth)
        } else if self.current_health == 0 {
            Some(InvariantViolation::AlreadyDefeated)
        } else if self.current_health > self.max_health {
            Some(InvariantViolation::HealthAboveMax)
        } else if self.current_mana > self.max_mana {
            Some(InvariantViolation::ManaAboveMax)
        } else if self.crit_chance > 100 {
            Some(InvariantViolation::CritChanceOutOfRange)
        } else {
            None
        };

        match violation {
            Some(violation) => Err(CombatError::InvalidCombatant { side, violation }),
            None => Ok(()),
        }
    }

    /// Applies one side's share of a turn result.
    ///
    /// Damage and mana cost are subtracted before healing and mana restore are
    /// added; both meters are clamped to `[0, max]`. The status effect set is
    /// replaced with the post-turn set, and a fired death prevention marks the
    /// once-per-battle flag.
    pub fn apply_delta(&mut self, delta: &SideDelta) {
        self.current_health = self
            .current_health
            .saturating_sub(delta.damage)
            .saturating_add(delta.healing)
            .min(self.max_health);
        self.current_mana = self
            .current_mana
            .saturating_sub(delta.mana_cost)
            .saturating_add(delta.mana_restore)
            .min(self.max_mana);
        self.status_effects = delta.status_effects.clone();
        if delta.death_prevention_triggered {
            self.death_prevention_used = true;
        }
    }

    /// Applies an end-of-effect instruction. Transitions for the other side
    /// are ignored.
    pub fn apply_transition(&mut self, side: Side, transition: &Transition) {
        if transition.side != side {
            return;
        }
        match transition.kind {
            ExpiryTransition::ScaleHealth { percent } => {
                if self.current_health == 0 {
                    return;
                }
                let scaled = (self.current_health as u64 * percent as u64 / 100) as u32;
                self.current_health = scaled.clamp(1, self.max_health);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::CombatModifiers;

    fn delta(damage: u32, healing: u32) -> SideDelta {
        SideDelta {
            damage,
            healing,
            ..SideDelta::default()
        }
    }

    #[test]
    fn validate_rejects_broken_invariants() {
        let ok = Combatant::new("Hero", 20, 10, 1);
        assert!(ok.validate(Side::Player).is_ok());

        let cases = [
            (Combatant::new("x", 0, 0, 0), InvariantViolation::ZeroMaxHealth),
            (ok.clone().with_health(0), InvariantViolation::AlreadyDefeated),
            (ok.clone().with_health(21), InvariantViolation::HealthAboveMax),
            (
                Combatant {
                    current_mana: 11,
                    ..ok.clone()
                },
                InvariantViolation::ManaAboveMax,
            ),
            (ok.clone().with_crit_chance(101), InvariantViolation::CritChanceOutOfRange),
        ];
        for (combatant, violation) in cases {
            assert_eq!(
                combatant.validate(Side::Monster),
                Err(CombatError::InvalidCombatant {
                    side: Side::Monster,
                    violation
                })
            );
        }
    }

    #[test]
    fn apply_delta_clamps_to_bounds() {
        let mut hero = Combatant::new("Hero", 20, 10, 0).with_health(5);
        hero.apply_delta(&delta(9, 0));
        assert_eq!(hero.current_health, 0);

        let mut hero = Combatant::new("Hero", 20, 10, 0).with_health(18);
        hero.apply_delta(&delta(1, 10));
        assert_eq!(hero.current_health, 20);

        let mut hero = Combatant::new("Hero", 20, 10, 0);
        hero.apply_delta(&SideDelta {
            mana_cost: 4,
            mana_restore: 1,
            modifiers: CombatModifiers::default(),
            ..SideDelta::default()
        });
        assert_eq!(hero.current_mana, 7);
    }

    #[test]
    fn apply_delta_marks_death_prevention() {
        let mut hero = Combatant::new("Hero", 20, 10, 0);
        hero.apply_delta(&SideDelta {
            death_prevention_triggered: true,
            ..SideDelta::default()
        });
        assert!(hero.death_prevention_used);
    }

    #[test]
    fn scale_health_transition_halves_and_keeps_alive() {
        let halve = Transition::new(
            Side::Player,
            "petrify",
            ExpiryTransition::ScaleHealth { percent: 50 },
        );

        let mut hero = Combatant::new("Hero", 20, 0, 0).with_health(15);
        hero.apply_transition(Side::Player, &halve);
        assert_eq!(hero.current_health, 7);

        let mut hero = Combatant::new("Hero", 20, 0, 0).with_health(1);
        hero.apply_transition(Side::Player, &halve);
        assert_eq!(hero.current_health, 1);

        let mut monster = Combatant::new("Rat", 20, 0, 0);
        monster.apply_transition(Side::Monster, &halve);
        assert_eq!(monster.current_health, 20);
    }

    #[test]
    fn side_opponent_and_display() {
        assert_eq!(Side::Player.opponent(), Side::Monster);
        assert_eq!(Side::Monster.opponent(), Side::Player);
        assert_eq!(Side::Player.to_string(), "player");
    }
}
