//! Read-only views of the state for presentation layers.

use super::{EnemyId, GameState};
use crate::battle::{Battle, Turn};
use crate::dialogue::Dialogue;
use crate::engine::GameMode;
use crate::stats::{Enemy, Player};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub attack_power: u32,
    pub speed: u32,
    pub defense: u32,
    pub critical_chance: u8,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub heal_amount: u32,
    pub heal_cooldown: u32,
    pub heal_cooldown_max: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_owned(),
            level: player.level,
            health: player.health(),
            max_health: player.max_health(),
            attack_power: player.attack_power(),
            speed: player.speed(),
            defense: player.defense,
            critical_chance: player.critical_chance,
            experience: player.experience,
            experience_to_next_level: player.experience_to_next_level,
            heal_amount: player.heal.amount,
            heal_cooldown: player.heal.cooldown(),
            heal_cooldown_max: player.heal.cooldown_max,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySnapshot {
    pub id: EnemyId,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub phase: u8,
    pub final_boss: bool,
}

impl From<&Enemy> for EnemySnapshot {
    fn from(enemy: &Enemy) -> Self {
        Self {
            id: enemy.id,
            name: enemy.name().to_owned(),
            health: enemy.health(),
            max_health: enemy.character.max_health(),
            phase: enemy.phase.number(),
            final_boss: enemy.final_boss,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub current_turn: Turn,
    pub turn_counter: u32,
    pub enemies: Vec<EnemySnapshot>,
    /// Rendered log lines, most recent last.
    pub log: Vec<String>,
}

impl From<&Battle> for BattleSnapshot {
    fn from(battle: &Battle) -> Self {
        Self {
            current_turn: battle.current_turn(),
            turn_counter: battle.turn_counter(),
            enemies: battle.enemies().iter().map(EnemySnapshot::from).collect(),
            log: battle.log().lines(),
        }
    }
}

/// The line currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueSnapshot {
    pub speaker: Option<String>,
    pub text: String,
    pub index: usize,
    pub len: usize,
}

impl DialogueSnapshot {
    /// `None` once the conversation is finished.
    pub fn capture(dialogue: &Dialogue) -> Option<Self> {
        dialogue.current().map(|line| Self {
            speaker: line.speaker().map(str::to_owned),
            text: line.text().to_owned(),
            index: dialogue.index(),
            len: dialogue.len(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub previous_mode: Option<GameMode>,
    pub player: PlayerSnapshot,
    pub battle: Option<BattleSnapshot>,
    pub dialogue: Option<DialogueSnapshot>,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            mode: state.mode,
            previous_mode: state.previous_mode,
            player: PlayerSnapshot::from(&state.player),
            battle: state.battle.as_ref().map(BattleSnapshot::from),
            dialogue: DialogueSnapshot::capture(&state.dialogue),
        }
    }
}
