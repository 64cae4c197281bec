//! Combatant stats.
//!
//! [`Character`] is the health/attack/speed block every combatant shares.
//! [`Player`] adds leveling, defense, crits and the heal ability; [`Enemy`]
//! adds an experience reward, optional skills and a two-phase behavior.

pub mod character;
pub mod enemy;
pub mod error;
pub mod player;
pub mod skill;

pub use character::Character;
pub use enemy::Enemy;
pub use error::AbilityError;
pub use player::{HealAbility, LevelUp, Player};
pub use skill::{Phase, Skill, SkillSet};
