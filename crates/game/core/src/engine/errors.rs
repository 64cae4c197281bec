//! Error types for mode transitions.

use super::{GameMode, ModeEvent};
use crate::battle::BattleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced by [`super::GameEngine`] entry points.
///
/// State is unchanged whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionError {
    /// The event has no transition from the current mode.
    #[error("{event} is not allowed in {mode} mode")]
    NotAllowed { mode: GameMode, event: ModeEvent },

    /// Battle mode without an active battle.
    #[error("no active battle")]
    MissingBattle,

    /// Paused without a mode to return to.
    #[error("no mode to resume")]
    MissingPreviousMode,

    #[error("battle rejected the action: {0}")]
    Battle(#[from] BattleError),
}

impl TransitionError {
    pub fn not_allowed(mode: GameMode, event: ModeEvent) -> Self {
        Self::NotAllowed { mode, event }
    }
}

impl GameError for TransitionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotAllowed { .. } => ErrorSeverity::Validation,
            Self::MissingBattle | Self::MissingPreviousMode => ErrorSeverity::Internal,
            Self::Battle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAllowed { .. } => "TRANSITION_NOT_ALLOWED",
            Self::MissingBattle => "TRANSITION_MISSING_BATTLE",
            Self::MissingPreviousMode => "TRANSITION_MISSING_PREVIOUS_MODE",
            Self::Battle(error) => error.error_code(),
        }
    }
}
