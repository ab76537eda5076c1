//! Simultaneous turn resolution.
//!
//! [`resolve_turn`] is the single entry point. It reads both combatants,
//! generates both sides' effects, nets them against each other's counters,
//! runs the death prevention check, applies and ticks status effects, and
//! returns a [`TurnResult`] of deltas. It never mutates its inputs; the
//! caller applies the result through [`Combatant::apply_delta`] and
//! [`Combatant::apply_transition`].

mod result;
mod status;

pub use result::{Negation, SideDelta, Transition, TurnResult};
pub use status::{TickOutcome, apply_status_effect, tick_status_effects};

use crate::action::{Action, Effect, EffectKind, GenerateContext, generate};
use crate::combat::{
    CombatModifiers, Counter, check_death_prevention, counters, dodge_heal, mitigate,
};
use crate::env::{CombatEnv, TurnRng};
use crate::error::CombatError;
use crate::state::{Combatant, Side};

/// Per-call position of the battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnContext {
    /// Dungeon floor, 1-based.
    pub floor: u32,
    /// Turn number within the battle; stamped on new status effects.
    pub turn: u64,
}

impl TurnContext {
    pub fn new(floor: u32, turn: u64) -> Self {
        Self { floor, turn }
    }
}

/// A value held for each side of the battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct PerSide<T> {
    player: T,
    monster: T,
}

impl<T> PerSide<T> {
    fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            player: f(Side::Player),
            monster: f(Side::Monster),
        }
    }

    fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Monster => &self.monster,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Monster => &mut self.monster,
        }
    }
}

const SIDES: [Side; 2] = [Side::Player, Side::Monster];

/// Resolves one simultaneous turn.
///
/// # Errors
///
/// Returns [`CombatError::InvalidCombatant`] if either combatant breaks a
/// state invariant. Nothing else fails: unknown data ids fall back.
pub fn resolve_turn(
    player: &Combatant,
    monster: &Combatant,
    player_action: &Action,
    monster_action: &Action,
    ctx: TurnContext,
    env: CombatEnv<'_>,
    rng: &TurnRng<'_>,
) -> Result<TurnResult, CombatError> {
    player.validate(Side::Player)?;
    monster.validate(Side::Monster)?;

    let combatants = PerSide {
        player,
        monster,
    };
    let actions = PerSide {
        player: player_action,
        monster: monster_action,
    };
    let mut result = TurnResult::default();

    // Modifiers are rebuilt from active effects; nothing carries over.
    let modifiers = PerSide::from_fn(|side| {
        CombatModifiers::from_effects(&combatants.get(side).status_effects, env.tables())
    });

    let generate_ctx = GenerateContext {
        env,
        rng,
        scaling: env.config().scaling.factor(ctx.floor),
    };
    let effects = PerSide::from_fn(|side| {
        let combatant = *combatants.get(side);
        let action = *actions.get(side);
        let side_modifiers = modifiers.get(side);
        if side_modifiers.disables(action, combatant.primary_weapon.as_deref()) {
            result
                .messages
                .push(format!("{} cannot use {}", combatant.name, action.id()));
            return Vec::new();
        }
        generate(action, side, combatant, side_modifiers, &generate_ctx)
    });

    let mut active_counters = PerSide::from_fn(|side| counters(effects.get(side), side));

    for side in SIDES {
        for effect in effects.get(side) {
            resolve_direct(
                effect,
                &combatants,
                &modifiers,
                &mut active_counters,
                &mut result,
            );
        }
    }

    for side in SIDES {
        for counter in active_counters.get(side) {
            resolve_counter(counter, &combatants, effects.get(side.opponent()), &mut result);
        }
    }

    for side in SIDES {
        let combatant = *combatants.get(side);
        let incoming = result.side(side).damage;
        if let Some(rescue) = check_death_prevention(side, combatant, incoming, effects.get(side)) {
            let delta = result.side_mut(side);
            delta.damage = rescue.damage;
            delta.healing = delta.healing.saturating_add(rescue.heal);
            delta.mana_restore = delta.mana_restore.saturating_add(rescue.mana_restore);
            delta.death_prevention_triggered = true;
            result.messages.push(format!(
                "{} refuses to fall and clings to life!",
                combatant.name
            ));
            tracing::debug!(%side, "death prevention fired");
        }
    }

    let mut status_sets = PerSide::from_fn(|side| combatants.get(side).status_effects.clone());
    for side in SIDES {
        for effect in effects.get(side) {
            let EffectKind::Status(application) = &effect.kind else {
                continue;
            };
            let target = effect.target;
            if target != effect.source && modifiers.get(target).is_immune() {
                result.messages.push(format!(
                    "{} is immune to {}",
                    combatants.get(target).name,
                    application.effect
                ));
                continue;
            }
            status::apply_status_effect(
                status_sets.get_mut(target),
                application,
                env.tables(),
                ctx.turn,
            );
        }
    }

    for side in SIDES {
        let name = &combatants.get(side).name;
        let mut set = core::mem::take(status_sets.get_mut(side));
        let tick = status::tick_status_effects(side, name, &mut set, env.tables());

        let delta = result.side_mut(side);
        delta.damage = delta.damage.saturating_add(tick.damage);
        delta.healing = delta.healing.saturating_add(tick.healing);
        delta.mana_restore = delta.mana_restore.saturating_add(tick.mana_restore);
        delta.modifiers = tick.modifiers;
        delta.status_effects = set;
        result.messages.extend(tick.messages);
        result.transitions.extend(tick.transitions);
    }

    tracing::debug!(
        turn = ctx.turn,
        player_damage = result.player.damage,
        monster_damage = result.monster.damage,
        "turn resolved"
    );
    Ok(result)
}

/// Accumulates one effect that lands during the exchange: damage (subject to
/// targeting and counters) and the never-negated costs, healing and crits.
fn resolve_direct(
    effect: &Effect,
    combatants: &PerSide<&Combatant>,
    modifiers: &PerSide<CombatModifiers>,
    counters: &mut PerSide<Vec<Counter>>,
    result: &mut TurnResult,
) {
    let source = effect.source;
    let target = effect.target;

    match &effect.kind {
        EffectKind::Damage {
            amount,
            category,
            ignores_armor,
            label,
        } => {
            let defender = *combatants.get(target);
            if modifiers.get(target).is_untargetable() {
                result.messages.push(format!(
                    "{}'s {label} passes harmlessly through {}",
                    combatants.get(source).name,
                    defender.name
                ));
                return;
            }

            if let Some(counter) = counters
                .get_mut(target)
                .iter_mut()
                .find(|counter| counter.negates_category(*category))
            {
                counter.triggered = true;
                result.negations.push(Negation {
                    attacker: source,
                    counter: counter.kind,
                    category: *category,
                    amount: *amount,
                });
                return;
            }

            let dealt = mitigate(
                *amount,
                *ignores_armor,
                defender.armor,
                modifiers.get(source),
                modifiers.get(target),
            );
            let delta = result.side_mut(target);
            delta.damage = delta.damage.saturating_add(dealt);
        }
        EffectKind::SelfDamage { amount } => {
            let delta = result.side_mut(source);
            delta.damage = delta.damage.saturating_add(*amount);
        }
        EffectKind::ManaCost { amount } => {
            let delta = result.side_mut(source);
            delta.mana_cost = delta.mana_cost.saturating_add(*amount);
        }
        EffectKind::Healing { amount } => {
            let delta = result.side_mut(target);
            delta.healing = delta.healing.saturating_add(*amount);
        }
        EffectKind::CriticalHit { label } => {
            result.critical_hits.push(format!(
                "{} lands a critical hit with {label}!",
                combatants.get(source).name
            ));
        }
        EffectKind::Status(_) | EffectKind::Defensive(_) | EffectKind::DeathPrevention { .. } => {}
    }
}

/// Applies a counter's retaliation or heal after all damage has been netted.
fn resolve_counter(
    counter: &Counter,
    combatants: &PerSide<&Combatant>,
    opponent_effects: &[Effect],
    result: &mut TurnResult,
) {
    let owner = combatants.get(counter.owner).name.as_str();
    let opponent = counter.owner.opponent();

    if counter.kind.heals() {
        let heal = dodge_heal(opponent_effects);
        let delta = result.side_mut(counter.owner);
        delta.healing = delta.healing.saturating_add(heal);
        result
            .messages
            .push(format!("{owner} dodges and recovers {heal} health"));
        return;
    }

    if !counter.triggered {
        return;
    }

    if counter.counter_damage > 0 {
        let delta = result.side_mut(opponent);
        delta.damage = delta.damage.saturating_add(counter.counter_damage);
        result.messages.push(format!(
            "{owner}'s {} strikes back for {} damage",
            counter.kind, counter.counter_damage
        ));
    } else {
        result
            .messages
            .push(format!("{owner}'s {} negates the attack", counter.kind));
    }
}
