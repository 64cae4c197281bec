//! Battle errors.

use crate::error::{ErrorSeverity, GameError};
use crate::stats::AbilityError;

/// Reasons a battle operation is rejected.
///
/// Except for [`BattleError::Ability`], a rejected call leaves the battle and
/// the player untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// A battle needs at least one enemy.
    #[error("battle requires at least one enemy")]
    NoEnemies,

    #[error("not the player's turn")]
    NotPlayersTurn,

    #[error("not the enemies' turn")]
    NotEnemiesTurn,

    /// The battle already ended in victory or defeat.
    #[error("battle is already over")]
    BattleOver,

    /// The requested ability could not be used; the refusal is logged.
    #[error(transparent)]
    Ability(#[from] AbilityError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoEnemies | Self::BattleOver => ErrorSeverity::Validation,
            Self::NotPlayersTurn | Self::NotEnemiesTurn => ErrorSeverity::Recoverable,
            Self::Ability(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoEnemies => "BATTLE_NO_ENEMIES",
            Self::NotPlayersTurn => "BATTLE_NOT_PLAYERS_TURN",
            Self::NotEnemiesTurn => "BATTLE_NOT_ENEMIES_TURN",
            Self::BattleOver => "BATTLE_OVER",
            Self::Ability(error) => error.error_code(),
        }
    }
}
