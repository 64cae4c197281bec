//! What a session intent did.

use lorma_core::{BattleOutcome, EnemyId, GameMode, LevelUp, NpcId, Turn};

/// Outcome of one intent or tick, for presentation layers that want to react
/// (sound, screen flash) without diffing snapshots.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Accepted, nothing changed.
    Idle,
    GameStarted,
    Moved,
    BattleStarted {
        enemies: Vec<EnemyId>,
        first: Turn,
    },
    /// A battle step resolved and the battle goes on.
    BattleStep {
        turn: Turn,
    },
    BattleWon {
        defeated: Vec<EnemyId>,
        experience: u32,
        level_ups: Vec<LevelUp>,
    },
    /// The final boss fell; the game is won.
    GameWon,
    /// The player ran out of health, in battle or in the world.
    GameOver,
    DialogueStarted {
        npc: NpcId,
    },
    DialogueAdvanced,
    DialogueEnded,
    Paused,
    Resumed {
        mode: GameMode,
    },
    ReturnedToMenu,
    Restarted {
        mode: GameMode,
    },
}

impl SessionEvent {
    /// Battle outcome carried by this event, if it closed a battle step.
    pub fn battle_outcome(&self) -> Option<BattleOutcome> {
        match self {
            Self::BattleStep { .. } => Some(BattleOutcome::Continue),
            Self::BattleWon { .. } | Self::GameWon => Some(BattleOutcome::Victory),
            Self::GameOver => Some(BattleOutcome::Defeat),
            _ => None,
        }
    }
}
