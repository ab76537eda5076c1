//! Deterministic turn resolution and status effects for dungeon battles.
//!
//! `combat-core` resolves one simultaneous turn between a player combatant
//! and a monster: it expands both chosen actions into effects, nets them
//! against each side's counters, guards against lethal damage with the
//! once-per-battle death prevention, and applies and ticks status effects.
//! The result is a [`TurnResult`] of deltas that the caller applies through
//! [`Combatant::apply_delta`]; the engine itself never mutates state.
//!
//! Static data comes in through [`TablesOracle`]; randomness through a
//! seeded [`TurnRng`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod scaling;
pub mod state;

#[cfg(test)]
mod testing;

pub use action::{Action, ActionKind, Effect, EffectKind, StatusApplication};
pub use combat::{CombatModifiers, CounterKind, DamageCategory};
pub use config::{DeathPreventionRules, GameConfig, ScalingRules};
pub use engine::{Negation, SideDelta, Transition, TurnContext, TurnResult, resolve_turn};
pub use env::{
    AbilityCalculator, AbilityDefinition, ActorOracle, ActorTemplate, ActorsSnapshot, CombatEnv,
    ExpiryTransition, PcgRng, RngOracle, SpellDefinition, StandardAbilityCalculator,
    StatusEffectDefinition, StatusFlags, StatusRoll, TablesOracle, TablesSnapshot, TurnRng,
    WeaponDefinition,
};
pub use error::{CombatError, ErrorSeverity, GameError, InvariantViolation};
pub use scaling::{ScalingFactor, scaling_factor};
pub use state::{AppliedStatusEffect, Combatant, Duration, Side, StatusEffects};
