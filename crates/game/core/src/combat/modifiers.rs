//! Transient per-turn combat modifiers.
//!
//! Modifiers are never stored on a combatant. The resolver rebuilds them from
//! the active status effects at the start of every call, and the status
//! engine reports the post-tick view back to the caller for presentation.

use crate::action::Action;
use crate::env::{StatusEffectDefinition, StatusFlags, TablesOracle};
use crate::state::StatusEffects;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatModifiers {
    /// Outgoing damage multiplier in percent.
    pub damage_multiplier: u32,
    /// Extra incoming damage in percent.
    pub damage_vulnerability: u32,
    pub armor_reduction: u32,
    pub crit_bonus: u32,
    /// Incoming damage reduction in percent (capped at 100 when used).
    pub damage_reduction: u32,
    pub flags: StatusFlags,
}

impl Default for CombatModifiers {
    fn default() -> Self {
        Self {
            damage_multiplier: 100,
            damage_vulnerability: 0,
            armor_reduction: 0,
            crit_bonus: 0,
            damage_reduction: 0,
            flags: StatusFlags::empty(),
        }
    }
}

impl CombatModifiers {
    /// Derives modifiers from a combatant's active effects. Unknown effect
    /// ids contribute nothing.
    pub fn from_effects(effects: &StatusEffects, tables: &(impl TablesOracle + ?Sized)) -> Self {
        let mut modifiers = Self::default();
        for applied in effects {
            if let Some(definition) = tables.status_effect(&applied.kind) {
                modifiers.fold(definition);
            }
        }
        modifiers
    }

    /// Adds one definition's modifier fields. Multipliers compound; the
    /// other fields add.
    pub fn fold(&mut self, definition: &StatusEffectDefinition) {
        if let Some(multiplier) = definition.damage_multiplier {
            self.damage_multiplier =
                (self.damage_multiplier as u64 * multiplier as u64 / 100).min(u32::MAX as u64) as u32;
        }
        self.damage_vulnerability = self
            .damage_vulnerability
            .saturating_add(definition.damage_vulnerability);
        self.armor_reduction = self.armor_reduction.saturating_add(definition.armor_reduction);
        self.crit_bonus = self.crit_bonus.saturating_add(definition.crit_bonus);
        self.damage_reduction = self
            .damage_reduction
            .saturating_add(definition.damage_reduction);
        self.flags |= definition.flags;
    }

    pub fn is_untargetable(&self) -> bool {
        self.flags.contains(StatusFlags::UNTARGETABLE)
    }

    pub fn is_immune(&self) -> bool {
        self.flags.contains(StatusFlags::EFFECT_IMMUNITY)
    }

    /// Returns true if these modifiers stop `action` from being performed.
    pub fn disables(&self, action: &Action, primary_weapon: Option<&str>) -> bool {
        if self.flags.contains(StatusFlags::DISABLE_ALL_ACTIONS) {
            return true;
        }
        match action {
            Action::Weapon(id) => {
                self.flags.contains(StatusFlags::DISABLE_WEAPONS)
                    || (self.flags.contains(StatusFlags::DISABLE_PRIMARY_WEAPON)
                        && primary_weapon == Some(id.as_str()))
            }
            Action::Spell(_) => self.flags.contains(StatusFlags::DISABLE_MAGIC),
            Action::Ability(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Duration;

    fn definition(flags: StatusFlags) -> StatusEffectDefinition {
        StatusEffectDefinition {
            flags,
            ..StatusEffectDefinition::new("x", "X", Duration::Turns(1))
        }
    }

    #[test]
    fn multipliers_compound_and_fields_add() {
        let mut modifiers = CombatModifiers::default();
        let rage = StatusEffectDefinition {
            damage_multiplier: Some(150),
            crit_bonus: 10,
            ..StatusEffectDefinition::new("rage", "Rage", Duration::Turns(2))
        };
        modifiers.fold(&rage);
        modifiers.fold(&rage);
        assert_eq!(modifiers.damage_multiplier, 225);
        assert_eq!(modifiers.crit_bonus, 20);
    }

    #[test]
    fn disablement_by_action_kind() {
        let weapon = Action::weapon("sword");
        let spell = Action::spell("fireball");
        let ability = Action::ability("riposte");

        let stunned = CombatModifiers {
            flags: definition(StatusFlags::DISABLE_ALL_ACTIONS).flags,
            ..CombatModifiers::default()
        };
        assert!(stunned.disables(&weapon, None));
        assert!(stunned.disables(&spell, None));
        assert!(stunned.disables(&ability, None));

        let silenced = CombatModifiers {
            flags: StatusFlags::DISABLE_MAGIC,
            ..CombatModifiers::default()
        };
        assert!(silenced.disables(&spell, None));
        assert!(!silenced.disables(&weapon, None));

        let disarmed = CombatModifiers {
            flags: StatusFlags::DISABLE_PRIMARY_WEAPON,
            ..CombatModifiers::default()
        };
        assert!(disarmed.disables(&weapon, Some("sword")));
        assert!(!disarmed.disables(&weapon, Some("bow")));
        assert!(!disarmed.disables(&weapon, None));
    }
}
