//! Common error infrastructure for combat-core.
//!
//! The engine has exactly one failure class that surfaces as an error: a
//! combatant whose numbers violate the state invariants. Unknown data-table
//! ids are not errors; they degrade to fallback definitions (see
//! [`crate::env::TablesOracle`]).

use crate::state::Side;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed on retry
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted battle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or corrupted state.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all errors raised by the combat crates.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable, SCREAMING_CASE `error_code` per variant
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Combatant invariant that was found broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    ZeroMaxHealth,
    AlreadyDefeated,
    HealthAboveMax,
    ManaAboveMax,
    CritChanceOutOfRange,
}

impl InvariantViolation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroMaxHealth => "max health is zero",
            Self::AlreadyDefeated => "current health is zero",
            Self::HealthAboveMax => "current health exceeds max health",
            Self::ManaAboveMax => "current mana exceeds max mana",
            Self::CritChanceOutOfRange => "crit chance exceeds 100",
        }
    }
}

impl core::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by [`crate::engine::resolve_turn`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// The caller handed over a combatant that breaks a state invariant.
    ///
    /// This is an upstream bug in session construction; the battle state
    /// should be treated as corrupted.
    #[error("invalid {side} combatant: {violation}")]
    InvalidCombatant {
        side: Side,
        violation: InvariantViolation,
    },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCombatant { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCombatant { violation, .. } => match violation {
                InvariantViolation::ZeroMaxHealth => "COMBATANT_ZERO_MAX_HEALTH",
                InvariantViolation::AlreadyDefeated => "COMBATANT_ALREADY_DEFEATED",
                InvariantViolation::HealthAboveMax => "COMBATANT_HEALTH_ABOVE_MAX",
                InvariantViolation::ManaAboveMax => "COMBATANT_MANA_ABOVE_MAX",
                InvariantViolation::CritChanceOutOfRange => "COMBATANT_CRIT_OUT_OF_RANGE",
            },
        }
    }
}
