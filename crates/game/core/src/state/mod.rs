//! Authoritative game state.
//!
//! Runtime layers read this state (or its [`GameSnapshot`]) but mutate it
//! only through [`crate::engine::GameEngine`].
mod common;
mod snapshot;

pub use common::{EnemyId, NpcId, Position};
pub use snapshot::{
    BattleSnapshot, DialogueSnapshot, EnemySnapshot, GameSnapshot, PlayerSnapshot,
};

use crate::battle::Battle;
use crate::dialogue::Dialogue;
use crate::engine::GameMode;
use crate::stats::Player;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub mode: GameMode,
    /// Mode interrupted by the pause screen; set only while Paused.
    pub previous_mode: Option<GameMode>,
    pub player: Player,
    /// Present only while a battle is running or paused.
    pub battle: Option<Battle>,
    pub dialogue: Dialogue,
}

impl GameState {
    /// Fresh state on the main menu.
    pub fn new(player: Player) -> Self {
        Self {
            mode: GameMode::MainMenu,
            previous_mode: None,
            player,
            battle: None,
            dialogue: Dialogue::new(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
