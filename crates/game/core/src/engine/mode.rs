//! Game modes and the transition table between them.

/// Top-level mode; decides which subsystem receives input.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameMode {
    #[default]
    MainMenu,
    World,
    Battle,
    Dialogue,
    GameOver,
    Victory,
    Paused,
}

impl GameMode {
    /// Modes that can be paused and resumed.
    pub const fn is_pausable(self) -> bool {
        matches!(self, Self::World | Self::Battle | Self::Dialogue)
    }
}

/// Something that happened and may move the game to another mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ModeEvent {
    /// Confirm on a menu-like screen (main menu, game over, victory).
    Confirm,
    /// Confirm on the game over screen when retries go straight to the world.
    Retry,
    EnemyCollision,
    NpcInteraction,
    PlayerDefeated,
    BattleWon,
    FinalBossDefeated,
    BattleLost,
    DialogueFinished,
    Pause,
    /// Leave the pause screen back to the mode it interrupted.
    Resume(GameMode),
    QuitToMenu,
}

/// The mode reached from `current` through `event`, or `None` when the event
/// is not legal there.
pub fn next_mode(current: GameMode, event: ModeEvent) -> Option<GameMode> {
    use GameMode::*;
    use ModeEvent as E;

    match (current, event) {
        (MainMenu, E::Confirm) => Some(World),

        (World, E::EnemyCollision) => Some(Battle),
        (World, E::NpcInteraction) => Some(Dialogue),
        (World, E::PlayerDefeated) => Some(GameOver),

        (Battle, E::BattleWon) => Some(World),
        (Battle, E::FinalBossDefeated) => Some(Victory),
        (Battle, E::BattleLost) => Some(GameOver),

        (Dialogue, E::DialogueFinished) => Some(World),

        (mode, E::Pause) if mode.is_pausable() => Some(Paused),
        (Paused, E::Resume(previous)) if previous.is_pausable() => Some(previous),
        (Paused, E::QuitToMenu) => Some(MainMenu),

        (GameOver, E::Confirm) => Some(MainMenu),
        (GameOver, E::Retry) => Some(World),
        (Victory, E::Confirm) => Some(MainMenu),

        _ => None,
    }
}
