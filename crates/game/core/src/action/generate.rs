//! Action effect generation.
//!
//! Expands one chosen action into the ordered list of primitive effects it
//! produces this turn. Generation reads the data tables and the attacker's
//! numbers and consumes RNG rolls; it never mutates a combatant.

use std::borrow::Cow;

use crate::combat::{CombatModifiers, CounterKind, DEATH_PREVENTION_ABILITY, DamageCategory};
use crate::config::GameConfig;
use crate::env::{AbilityInput, CombatEnv, StatusRoll, TurnRng};
use crate::scaling::ScalingFactor;
use crate::state::{Combatant, Side};

use super::effect::{Effect, StatusApplication};
use super::Action;

/// Turn-wide inputs shared by both sides' generation.
#[derive(Clone, Copy, Debug)]
pub struct GenerateContext<'a> {
    pub env: CombatEnv<'a>,
    pub rng: &'a TurnRng<'a>,
    /// Floor scaling factor for this battle.
    pub scaling: ScalingFactor,
}

/// Generates the effects of `action` performed by `attacker` on `source`'s
/// behalf. `modifiers` are the attacker's modifiers for this turn.
///
/// Disablement is checked by the resolver before generation.
pub fn generate(
    action: &Action,
    source: Side,
    attacker: &Combatant,
    modifiers: &CombatModifiers,
    ctx: &GenerateContext<'_>,
) -> Vec<Effect> {
    let mut effects = Vec::new();
    match action {
        Action::Weapon(id) => weapon(id, source, attacker, modifiers, ctx, &mut effects),
        Action::Ability(id) => ability(id, source, attacker, ctx, &mut effects),
        Action::Spell(id) => spell(id, source, ctx, &mut effects),
    }
    tracing::debug!(%source, %action, count = effects.len(), "generated effects");
    effects
}

fn weapon(
    id: &str,
    source: Side,
    attacker: &Combatant,
    modifiers: &CombatModifiers,
    ctx: &GenerateContext<'_>,
    effects: &mut Vec<Effect>,
) {
    let weapon = ctx.env.tables().weapon_or_fallback(id);

    // The fallback weapon hits for a flat amount on every floor.
    let mut damage = match &weapon {
        Cow::Borrowed(known) => ctx.scaling.apply(known.damage),
        Cow::Owned(fallback) => fallback.damage,
    };
    let crit_chance = attacker.crit_chance.saturating_add(modifiers.crit_bonus);
    if ctx.rng.chance(source, crit_chance) {
        damage = damage.saturating_mul(2);
        effects.push(Effect::critical_hit(source, weapon.name.clone()));
    }

    effects.push(Effect::damage(
        source,
        damage,
        weapon.category,
        weapon.ignores_armor,
        weapon.name.clone(),
    ));
    if weapon.health_cost > 0 {
        effects.push(Effect::self_damage(source, weapon.health_cost));
    }
    roll_status_effects(&weapon.status_effects, source, ctx.rng, effects);
}

fn ability(
    id: &str,
    source: Side,
    attacker: &Combatant,
    ctx: &GenerateContext<'_>,
    effects: &mut Vec<Effect>,
) {
    let tables = ctx.env.tables();

    if let Some(counter) = CounterKind::from_ability_id(id) {
        effects.push(Effect::defensive(source, counter));
        push_mana_cost(tables.ability(id).map_or(0, |a| a.mana_cost), source, effects);
        return;
    }

    if id == DEATH_PREVENTION_ABILITY {
        let rules = ctx.env.config().death_prevention;
        effects.push(Effect::death_prevention(source, rules.heal, rules.mana_restore));
        push_mana_cost(tables.ability(id).map_or(0, |a| a.mana_cost), source, effects);
        return;
    }

    let ability = tables.ability_or_fallback(id);
    let output = ctx.env.abilities().calculate(&AbilityInput {
        ability: &*ability,
        scaling: ctx.scaling,
        caster_health: attacker.current_health,
        caster_max_health: attacker.max_health,
    });

    if output.damage > 0 {
        effects.push(Effect::damage(
            source,
            output.damage,
            ability.category,
            ability.ignores_armor,
            ability.name.clone(),
        ));
    }
    if output.healing > 0 {
        effects.push(Effect::healing(source, output.healing));
    }
    push_mana_cost(ability.mana_cost, source, effects);
    if ability.self_damage {
        effects.push(Effect::self_damage(source, GameConfig::ABILITY_SELF_DAMAGE));
    }
    roll_status_effects(&output.status_effects, source, ctx.rng, effects);
}

fn spell(id: &str, source: Side, ctx: &GenerateContext<'_>, effects: &mut Vec<Effect>) {
    let spell = ctx.env.tables().spell_or_fallback(id);

    if spell.damage > 0 {
        effects.push(Effect::damage(
            source,
            spell.damage,
            DamageCategory::Magic,
            spell.ignores_armor,
            spell.name.clone(),
        ));
    }
    push_mana_cost(spell.mana_cost, source, effects);
    if spell.health_cost > 0 {
        effects.push(Effect::self_damage(source, spell.health_cost));
    }
    if spell.healing > 0 {
        effects.push(Effect::healing(source, spell.healing));
    }
    roll_status_effects(&spell.status_effects, source, ctx.rng, effects);
}

fn push_mana_cost(amount: u32, source: Side, effects: &mut Vec<Effect>) {
    if amount > 0 {
        effects.push(Effect::mana_cost(source, amount));
    }
}

/// Emits one status application per roll that succeeds. Every roll below
/// 100% consumes its own RNG value.
fn roll_status_effects(
    rolls: &[StatusRoll],
    source: Side,
    rng: &TurnRng<'_>,
    effects: &mut Vec<Effect>,
) {
    for roll in rolls {
        if !rng.chance(source, roll.chance) {
            continue;
        }
        let target = if roll.on_self { source } else { source.opponent() };
        effects.push(Effect::status(
            source,
            target,
            StatusApplication {
                effect: roll.effect.clone(),
                duration: roll.duration,
                power: roll.power,
            },
        ));
    }
}
