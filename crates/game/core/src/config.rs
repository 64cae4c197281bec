/// Where a confirmed Game Over sends the player.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RestartTarget {
    /// Back to the title screen; the next confirm starts a fresh game.
    #[default]
    MainMenu,
    /// Straight back into the current world with health and cooldowns restored.
    World,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seed for every random roll of a session (crits, dodges, skill choice).
    pub game_seed: u64,
    /// Mode entered when the player confirms on the Game Over screen.
    pub restart_target: RestartTarget,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of battle log entries kept before the oldest is evicted.
    pub const BATTLE_LOG_CAPACITY: usize = 10;

    // ===== battle rules =====
    /// Skill attack multiplier over attack power, in percent.
    pub const SKILL_MULTIPLIER_PERCENT: u32 = 150;
    /// Critical hit multiplier, in percent.
    pub const CRITICAL_MULTIPLIER_PERCENT: u32 = 150;
    /// Dodge chance floor before speed is added.
    pub const DODGE_BASE_PERCENT: u32 = 5;
    /// Dodge chance gained per point of player speed.
    pub const DODGE_PER_SPEED_PERCENT: u32 = 2;
    /// Dodge chance ceiling.
    pub const DODGE_CAP_PERCENT: u32 = 30;
    /// Chance that a skilled enemy uses a skill instead of a basic attack.
    pub const ENEMY_SKILL_CHANCE_PERCENT: u32 = 30;
    /// Chance that a phase-2 enemy picks its strongest skill.
    pub const PHASE_TWO_FOCUS_PERCENT: u32 = 70;
    /// Experience granted for an enemy that does not declare its own reward.
    pub const DEFAULT_EXPERIENCE_REWARD: u32 = 25;

    // ===== leveling curve =====
    /// Experience needed to go from level 1 to level 2.
    pub const BASE_EXPERIENCE_TO_LEVEL: u32 = 100;
    /// Growth factor of the experience curve per level.
    pub const EXPERIENCE_GROWTH: f64 = 1.3;
    /// Max health gained per level.
    pub const HEALTH_PER_LEVEL: u32 = 20;
    /// Attack and heal growth factor per level.
    pub const STAT_GROWTH: f64 = 1.1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GAME_SEED: u64 = 0x4C4F_524D_4153_4147;

    pub fn new() -> Self {
        Self {
            game_seed: Self::DEFAULT_GAME_SEED,
            restart_target: RestartTarget::default(),
        }
    }

    pub fn with_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            ..Self::new()
        }
    }

    pub fn with_restart_target(mut self, restart_target: RestartTarget) -> Self {
        self.restart_target = restart_target;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
