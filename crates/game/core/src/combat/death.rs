//! Post-resolution lethal guard.

use crate::action::{Effect, EffectKind};
use crate::state::{Combatant, Side};

/// Ability id of the one-shot death prevention declaration.
pub const DEATH_PREVENTION_ABILITY: &str = "last_stand";

/// Outcome of a fired death prevention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rescue {
    /// Incoming damage after clamping; leaves the combatant at 1 health.
    pub damage: u32,
    pub heal: u32,
    pub mana_restore: u32,
}

/// Checks whether `side` survives an otherwise lethal `incoming_damage`.
///
/// Fires only if the damage would bring the combatant to 0, the side
/// declared death prevention among `effects` this turn, and the combatant has
/// not used it earlier in the battle.
pub fn check_death_prevention(
    side: Side,
    combatant: &Combatant,
    incoming_damage: u32,
    effects: &[Effect],
) -> Option<Rescue> {
    if combatant.death_prevention_used || incoming_damage < combatant.current_health {
        return None;
    }

    effects
        .iter()
        .filter(|effect| effect.source == side)
        .find_map(|effect| match effect.kind {
            EffectKind::DeathPrevention { heal, mana_restore } => Some(Rescue {
                damage: combatant.current_health.saturating_sub(1),
                heal,
                mana_restore,
            }),
            _ => None,
        })
}
