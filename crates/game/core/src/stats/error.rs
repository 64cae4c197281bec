//! Ability errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when a player ability cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityError {
    /// Heal is still cooling down.
    #[error("Heal is on cooldown ({remaining} turns left)")]
    OnCooldown { remaining: u32 },
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OnCooldown { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OnCooldown { .. } => "ABILITY_ON_COOLDOWN",
        }
    }
}
