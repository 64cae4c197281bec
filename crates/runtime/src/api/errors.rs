//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule rejections from the core and inconsistencies between the world
//! collaborator and the content oracles.

use thiserror::Error;

use lorma_core::{EnemyId, ErrorSeverity, GameError, NpcId, TransitionError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The intent is not legal right now; nothing changed.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("world reported {0}, which has no spawn record")]
    UnknownEnemy(EnemyId),

    #[error("world reported {0}, which has no spawn record")]
    UnknownNpc(NpcId),

    #[error("spawn record {id} names unknown template '{template}'")]
    UnknownTemplate { id: String, template: String },

    #[error("session requires oracles to be configured before building")]
    MissingOracles,

    #[error("session requires a world to be configured before building")]
    MissingWorld,
}

impl RuntimeError {
    /// Whether this is a rejected intent rather than a broken session.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Transition(_))
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Transition(error) => error.severity(),
            Self::UnknownEnemy(_) | Self::UnknownNpc(_) | Self::UnknownTemplate { .. } => {
                ErrorSeverity::Internal
            }
            Self::MissingOracles | Self::MissingWorld => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Transition(error) => error.error_code(),
            Self::UnknownEnemy(_) => "RUNTIME_UNKNOWN_ENEMY",
            Self::UnknownNpc(_) => "RUNTIME_UNKNOWN_NPC",
            Self::UnknownTemplate { .. } => "RUNTIME_UNKNOWN_TEMPLATE",
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::MissingWorld => "RUNTIME_MISSING_WORLD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorma_core::{AbilityError, BattleError, GameMode, ModeEvent};

    #[test]
    fn severity_follows_the_wrapped_error() {
        let cooldown = RuntimeError::from(TransitionError::from(BattleError::from(
            AbilityError::OnCooldown { remaining: 1 },
        )));
        assert_eq!(cooldown.severity(), ErrorSeverity::Recoverable);
        assert_eq!(cooldown.error_code(), "ABILITY_ON_COOLDOWN");
        assert!(cooldown.is_rejection());

        let pause = RuntimeError::from(TransitionError::not_allowed(
            GameMode::MainMenu,
            ModeEvent::Pause,
        ));
        assert_eq!(pause.severity(), ErrorSeverity::Validation);
        assert_eq!(pause.to_string(), "pause is not allowed in main_menu mode");

        assert_eq!(
            RuntimeError::UnknownEnemy(EnemyId(4)).severity(),
            ErrorSeverity::Internal
        );
    }
}
