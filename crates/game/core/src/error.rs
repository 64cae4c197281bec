//! Common error infrastructure for lorma-core.
//!
//! Domain-specific errors (`BattleError`, `AbilityError`, `TransitionError`)
//! live next to the operations they guard. They all implement [`GameError`]
//! so callers can classify a failure without matching every variant.
//!
//! Nothing in the core is fatal to the process: a rejected call leaves the
//! state exactly as it was and reports why.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same intent may succeed later (cooldown, wrong turn)
/// - **Validation**: the request itself is malformed (no enemies, bad event)
/// - **Internal**: state and collaborators disagree
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Retry later or pick another action.
    ///
    /// Examples: heal on cooldown, enemy turn still pending
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: battle with zero enemies, pausing from the main menu
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: world reports an enemy id the roster does not know
    Internal,

    /// Unrecoverable.
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
}

/// Common trait for all lorma-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable, upper snake case and prefixed by the concern
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
