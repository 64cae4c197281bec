//! Per-attack outcome records.

/// Outcome of one attack against one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack landed for normal damage.
    Hit,
    /// Attack landed for critical damage.
    Critical,
    /// Target avoided the attack.
    Dodged,
}

/// Result of resolving one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Damage applied to the target (0 when dodged).
    pub damage: u32,
    /// Whether the target was brought to 0 health by this attack.
    pub defeated: bool,
}

impl AttackResult {
    pub const fn dodged() -> Self {
        Self {
            outcome: AttackOutcome::Dodged,
            damage: 0,
            defeated: false,
        }
    }

    pub const fn is_critical(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Critical)
    }
}
