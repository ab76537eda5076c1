//! Pluggable ability calculation.
//!
//! Non-defensive abilities are turned into numbers by an
//! [`AbilityCalculator`]. The standard calculator reads everything from the
//! ability definition; callers may inject their own to model class or gear
//! bonuses without touching the generator.

use crate::scaling::ScalingFactor;

use super::tables::{AbilityDefinition, StatusRoll};

/// Inputs for one ability use.
#[derive(Clone, Copy, Debug)]
pub struct AbilityInput<'a> {
    pub ability: &'a AbilityDefinition,
    /// Floor scaling factor of the current battle.
    pub scaling: ScalingFactor,
    pub caster_health: u32,
    pub caster_max_health: u32,
}

/// Damage, healing and status output of an ability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityOutput {
    pub damage: u32,
    pub healing: u32,
    pub status_effects: Vec<StatusRoll>,
}

pub trait AbilityCalculator: Send + Sync {
    fn calculate(&self, input: &AbilityInput<'_>) -> AbilityOutput;
}

/// Uses the definition as written. Damage scales with the floor only for
/// abilities flagged `scales_with_floor`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardAbilityCalculator;

impl AbilityCalculator for StandardAbilityCalculator {
    fn calculate(&self, input: &AbilityInput<'_>) -> AbilityOutput {
        let ability = input.ability;
        let damage = if ability.scales_with_floor {
            input.scaling.apply(ability.damage)
        } else {
            ability.damage
        };
        AbilityOutput {
            damage,
            healing: ability.healing,
            status_effects: ability.status_effects.clone(),
        }
    }
}
