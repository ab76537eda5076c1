//! Battle sessions over the deterministic combat engine.
//!
//! This crate is the caller side of `combat-core`: it spawns combatants from
//! content templates, feeds each side's chosen action to
//! [`combat_core::resolve_turn`], and applies the returned deltas and
//! transitions.
//!
//! Modules are organized by responsibility:
//! - [`session`] owns the combatant pair and the turn loop
//! - [`provider`] sources each side's action
//! - [`oracle`] shares immutable content between sessions
pub mod error;
pub mod oracle;
pub mod provider;
pub mod session;

pub use error::{Result, SessionError};
pub use oracle::OracleManager;
pub use provider::{ActionProvider, FixedActionProvider, RotationProvider};
pub use session::{BattleSession, Outcome, SessionState};
