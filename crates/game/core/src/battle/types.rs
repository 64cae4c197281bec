//! Battle vocabulary shared by the engine, the log and the runtime.

use crate::stats::LevelUp;

/// Side that acts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Turn {
    Player,
    Enemy,
}

/// What a battle step resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    /// The battle goes on.
    Continue,
    /// Every enemy is down.
    Victory,
    /// The player is down.
    Defeat,
}

/// Offensive move of the player.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackKind {
    /// `attack_power` damage.
    Basic,
    /// 1.5x `attack_power` damage.
    Skill,
}

impl AttackKind {
    /// Name shown in the battle log.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Attack",
            Self::Skill => "Skill Attack",
        }
    }
}

/// Everything the player can do on their turn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleAction {
    Basic,
    Skill,
    Heal,
}

impl From<AttackKind> for BattleAction {
    fn from(kind: AttackKind) -> Self {
        match kind {
            AttackKind::Basic => Self::Basic,
            AttackKind::Skill => Self::Skill,
        }
    }
}

/// Experience and levels granted by a won battle.
///
/// Kept apart from the bounded log, which may have evicted the entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryRewards {
    pub experience: u32,
    pub level_ups: Vec<LevelUp>,
}
