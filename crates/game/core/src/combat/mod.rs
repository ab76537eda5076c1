//! Combat rules shared by the generator and the resolver.
//!
//! - `damage`: damage categories and hit mitigation
//! - `modifiers`: per-turn modifiers derived from status effects
//! - `counter`: defensive declarations turned into counters
//! - `death`: the once-per-battle lethal guard

pub mod counter;
pub mod damage;
pub mod death;
pub mod modifiers;

pub use counter::{Counter, CounterKind, counters, dodge_heal};
pub use damage::{CategorySet, DamageCategory, mitigate};
pub use death::{DEATH_PREVENTION_ABILITY, Rescue, check_death_prevention};
pub use modifiers::CombatModifiers;
