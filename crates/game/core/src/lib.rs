//! Rules core of Lorma Saga.
//!
//! `lorma-core` defines the canonical rules (stats, battle, dialogue, game
//! modes) and exposes pure APIs with no I/O and no logging. All mode changes
//! flow through [`engine::GameEngine`]; randomness is injected through
//! [`env::Dice`] so a session replays exactly from its seed.
pub mod battle;
pub mod combat;
pub mod config;
pub mod dialogue;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use battle::{
    AttackKind, Battle, BattleAction, BattleError, BattleLog, BattleLogEntry, BattleOutcome, Turn,
    VictoryRewards,
};
pub use combat::{AttackOutcome, AttackResult};
pub use config::{GameConfig, RestartTarget};
pub use dialogue::{Dialogue, DialogueLine};
pub use engine::{BattleStep, GameEngine, GameMode, ModeEvent, TransitionError, next_mode};
pub use env::{
    ActorOracle, Dice, EnemySpawn, EnemyTemplate, FixedRng, NpcOracle, NpcSpawn, NpcTemplate,
    PcgRng, PlayerTemplate, RngOracle, SequenceRng,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{EnemyId, GameSnapshot, GameState, NpcId, Position};
pub use stats::{AbilityError, Character, Enemy, LevelUp, Phase, Player, Skill, SkillSet};
