//! Status effect application and ticking.
//!
//! Both operations work on an owned copy of a combatant's effect set; the
//! resolver hands the final set back to the caller in
//! [`SideDelta::status_effects`](super::SideDelta).

use crate::action::StatusApplication;
use crate::combat::CombatModifiers;
use crate::env::TablesOracle;
use crate::state::{AppliedStatusEffect, Application, Duration, Side, StatusEffects};

use super::result::Transition;

/// Applies a new status effect to `effects`.
///
/// Returns `None` when the effect id is unknown; such applications are
/// ignored.
pub fn apply_status_effect(
    effects: &mut StatusEffects,
    application: &StatusApplication,
    tables: &(impl TablesOracle + ?Sized),
    turn: u64,
) -> Option<Application> {
    let Some(definition) = tables.status_effect(&application.effect) else {
        tracing::debug!(effect = %application.effect, "ignoring unknown status effect");
        return None;
    };

    let duration = application.duration.unwrap_or(definition.duration);
    let incoming = AppliedStatusEffect::new(&definition.id, duration, application.power, turn);
    let outcome = effects.apply(incoming, definition.stackable);
    if outcome == Application::Dropped {
        tracing::warn!(
            effect = %definition.id,
            "status effect set is full, dropping new effect"
        );
    }
    Some(outcome)
}

/// Contribution of one combatant's status effects for a turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub damage: u32,
    pub healing: u32,
    pub mana_restore: u32,
    /// Modifiers the next resolution will see, expiring effects included.
    pub modifiers: CombatModifiers,
    pub transitions: Vec<Transition>,
    pub messages: Vec<String>,
}

/// Runs one turn of every active effect on `effects`.
///
/// Per-turn amounts are multiplied by the instance's power (at least 1).
/// Instant effects grant their restore amounts once and are dropped. Timed
/// effects lose one turn; permanent effects never do. A timed effect that
/// runs out is marked expiring: it still folds into this tick's modifiers and
/// stays in the set so the next resolution sees it, and the following tick
/// removes it without any further contribution. Running out with an
/// `on_expire` instruction produces a [`Transition`]. Effects with unknown
/// definitions are left untouched.
pub fn tick_status_effects(
    side: Side,
    name: &str,
    effects: &mut StatusEffects,
    tables: &(impl TablesOracle + ?Sized),
) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    effects.retain(|applied| {
        let Some(definition) = tables.status_effect(&applied.kind) else {
            return !applied.expiring;
        };
        if applied.expiring {
            outcome
                .messages
                .push(format!("{} wears off {name}", definition.name));
            return false;
        }
        let power = applied.effective_power();

        let damage = definition.damage_per_turn.saturating_mul(power);
        let healing = definition.health_per_turn.saturating_mul(power);
        let mana = definition.mana_per_turn.saturating_mul(power);
        outcome.damage = outcome.damage.saturating_add(damage);
        outcome.healing = outcome.healing.saturating_add(healing);
        outcome.mana_restore = outcome.mana_restore.saturating_add(mana);
        if damage > 0 {
            outcome
                .messages
                .push(format!("{name} takes {damage} damage from {}", definition.name));
        }
        if healing > 0 {
            outcome
                .messages
                .push(format!("{name} recovers {healing} health from {}", definition.name));
        }

        if definition.is_instant() || applied.duration == Duration::Instant {
            outcome.healing = outcome.healing.saturating_add(definition.health_restore);
            outcome.mana_restore = outcome.mana_restore.saturating_add(definition.mana_restore);
            outcome
                .messages
                .push(format!("{name} is restored by {}", definition.name));
            return false;
        }

        outcome.modifiers.fold(definition);
        match applied.duration.ticked() {
            Some(duration) => applied.duration = duration,
            None => {
                applied.expiring = true;
                if let Some(kind) = definition.on_expire {
                    outcome
                        .transitions
                        .push(Transition::new(side, &definition.id, kind));
                }
            }
        }
        true
    });

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ExpiryTransition, StatusFlags};
    use crate::testing;

    fn application(effect: &str) -> StatusApplication {
        StatusApplication {
            effect: effect.to_string(),
            duration: None,
            power: 1,
        }
    }

    #[test]
    fn stackable_applications_merge() {
        let tables = testing::tables();
        let mut effects = StatusEffects::empty();

        let first = StatusApplication {
            duration: Some(Duration::Turns(2)),
            ..application("poison")
        };
        assert_eq!(
            apply_status_effect(&mut effects, &first, &tables, 1),
            Some(Application::Inserted)
        );
        assert_eq!(
            apply_status_effect(&mut effects, &application("poison"), &tables, 2),
            Some(Application::Stacked)
        );

        let poison = effects.get("poison").cloned();
        assert_eq!(
            poison,
            Some(AppliedStatusEffect::new("poison", Duration::Turns(5), 2, 1))
        );
    }

    #[test]
    fn non_stackable_keeps_the_longer_duration() {
        let tables = testing::tables();
        let mut effects = StatusEffects::empty();
        let long = StatusApplication {
            duration: Some(Duration::Turns(4)),
            ..application("burn")
        };
        apply_status_effect(&mut effects, &long, &tables, 1);
        apply_status_effect(&mut effects, &application("burn"), &tables, 2);
        assert_eq!(
            effects.get("burn").map(|e| e.duration),
            Some(Duration::Turns(4))
        );
    }

    #[test]
    fn unknown_effects_are_ignored() {
        let tables = testing::tables();
        let mut effects = StatusEffects::empty();
        assert_eq!(
            apply_status_effect(&mut effects, &application("doom"), &tables, 1),
            None
        );
        assert!(effects.is_empty());

        let mut stale: StatusEffects =
            [AppliedStatusEffect::new("doom", Duration::Turns(2), 1, 0)]
                .into_iter()
                .collect();
        let outcome = tick_status_effects(Side::Player, "Hero", &mut stale, &tables);
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(stale.get("doom").map(|e| e.duration), Some(Duration::Turns(2)));
    }

    #[test]
    fn tick_scales_by_power_and_decrements() {
        let tables = testing::tables();
        let mut effects: StatusEffects = [
            AppliedStatusEffect::new("poison", Duration::Turns(3), 2, 0),
            AppliedStatusEffect::new("regen", Duration::Turns(1), 0, 0),
            AppliedStatusEffect::new("focus", Duration::Permanent, 1, 0),
        ]
        .into_iter()
        .collect();

        let outcome = tick_status_effects(Side::Player, "Hero", &mut effects, &tables);
        assert_eq!(outcome.damage, 4);
        assert_eq!(outcome.healing, 2);
        assert_eq!(outcome.mana_restore, 1);
        assert_eq!(effects.get("poison").map(|e| e.duration), Some(Duration::Turns(2)));
        assert_eq!(effects.get("regen").map(|e| e.expiring), Some(true));
        assert_eq!(effects.get("focus").map(|e| e.duration), Some(Duration::Permanent));
    }

    #[test]
    fn instant_effects_restore_once() {
        let tables = testing::tables();
        let mut effects: StatusEffects =
            [AppliedStatusEffect::new("elixir", Duration::Instant, 1, 0)]
                .into_iter()
                .collect();

        let outcome = tick_status_effects(Side::Monster, "Goblin", &mut effects, &tables);
        assert_eq!(outcome.healing, 5);
        assert_eq!(outcome.mana_restore, 3);
        assert!(effects.is_empty());
    }

    #[test]
    fn expiry_emits_transition() {
        let tables = testing::tables();
        let mut effects: StatusEffects =
            [AppliedStatusEffect::new("petrify", Duration::Turns(1), 1, 0)]
                .into_iter()
                .collect();

        let outcome = tick_status_effects(Side::Player, "Hero", &mut effects, &tables);
        assert_eq!(
            outcome.transitions,
            vec![Transition::new(
                Side::Player,
                "petrify",
                ExpiryTransition::ScaleHealth { percent: 50 }
            )]
        );
        assert_eq!(effects.get("petrify").map(|e| e.expiring), Some(true));

        let after = tick_status_effects(Side::Player, "Hero", &mut effects, &tables);
        assert!(effects.is_empty());
        assert!(after.transitions.is_empty());
        assert_eq!(after.messages, vec!["Petrification wears off Hero".to_string()]);
    }

    #[test]
    fn last_turn_still_folds_modifiers() {
        let tables = testing::tables();
        let mut effects: StatusEffects =
            [AppliedStatusEffect::new("stun", Duration::Turns(1), 1, 0)]
                .into_iter()
                .collect();

        let outcome = tick_status_effects(Side::Monster, "Goblin", &mut effects, &tables);
        assert!(outcome.modifiers.flags.contains(StatusFlags::DISABLE_ALL_ACTIONS));
        assert_eq!(
            CombatModifiers::from_effects(&effects, &tables),
            outcome.modifiers
        );

        let after = tick_status_effects(Side::Monster, "Goblin", &mut effects, &tables);
        assert_eq!(after.modifiers, CombatModifiers::default());
        assert!(effects.is_empty());
    }

    #[test]
    fn surviving_effects_fold_modifiers() {
        let tables = testing::tables();
        let mut effects: StatusEffects =
            [AppliedStatusEffect::new("rage", Duration::Turns(2), 1, 0)]
                .into_iter()
                .collect();

        let outcome = tick_status_effects(Side::Player, "Hero", &mut effects, &tables);
        assert_eq!(outcome.modifiers.damage_multiplier, 150);
        assert_eq!(outcome.modifiers.crit_bonus, 100);
    }
}
