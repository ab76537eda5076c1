//! Unified error type surfaced by battle sessions.
//!
//! Wraps engine failures and adds the session-level conditions callers see
//! when driving a battle turn by turn.
use combat_core::{CombatError, ErrorSeverity, GameError, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("battle already ended after turn {turn}")]
    BattleOver { turn: u64 },

    #[error("unknown actor template '{id}'")]
    UnknownTemplate { id: String },

    #[error("{side} has no action to take")]
    NoActionAvailable { side: Side },
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(err) => err.severity(),
            Self::BattleOver { .. } | Self::UnknownTemplate { .. } => ErrorSeverity::Validation,
            Self::NoActionAvailable { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Combat(err) => err.error_code(),
            Self::BattleOver { .. } => "SESSION_BATTLE_OVER",
            Self::UnknownTemplate { .. } => "SESSION_UNKNOWN_TEMPLATE",
            Self::NoActionAvailable { .. } => "SESSION_NO_ACTION",
        }
    }
}
