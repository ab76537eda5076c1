//! Combatant state owned by the caller and read by the engine.
mod combatant;
mod status;

pub use combatant::{Combatant, Side};
pub use status::{AppliedStatusEffect, Application, Duration, StatusEffects};
