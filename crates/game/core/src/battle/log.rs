//! Bounded battle log.
//!
//! Entries are structured so the runtime can react to them; `Display` gives
//! the line shown to the player.

use std::fmt;

use arrayvec::ArrayVec;

use super::{AttackKind, Turn};
use crate::config::GameConfig;
use crate::stats::LevelUp;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleLogEntry {
    Started {
        player: String,
        enemies: Vec<String>,
        first: Turn,
    },
    PlayerAttack {
        player: String,
        target: String,
        kind: AttackKind,
        damage: u32,
        critical: bool,
        defeated: bool,
    },
    Healed {
        player: String,
        amount: u32,
    },
    HealOnCooldown {
        remaining: u32,
    },
    Dodged {
        player: String,
        enemy: String,
    },
    EnemyAttack {
        enemy: String,
        damage: u32,
    },
    EnemySkill {
        enemy: String,
        skill: String,
        damage: u32,
        effect: Option<String>,
    },
    PhaseChange {
        enemy: String,
    },
    Victory {
        experience: u32,
    },
    LevelUp {
        player: String,
        report: LevelUp,
    },
    Defeat {
        player: String,
    },
}

impl fmt::Display for BattleLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { player, enemies, .. } => {
                write!(f, "Battle started! {player} vs {}", enemies.join(", "))
            }
            Self::PlayerAttack {
                player,
                target,
                kind,
                damage,
                critical,
                defeated,
            } => {
                if *critical {
                    f.write_str("Critical hit! ")?;
                }
                write!(f, "{player} used {} on {target} for {damage} damage!", kind.label())?;
                if *defeated {
                    write!(f, " {target} was defeated!")?;
                }
                Ok(())
            }
            Self::Healed { player, amount } => write!(f, "{player} healed for {amount} HP!"),
            Self::HealOnCooldown { remaining } => {
                write!(f, "Heal is on cooldown for {remaining} more turns!")
            }
            Self::Dodged { player, enemy } => write!(f, "{player} dodged {enemy}'s attack!"),
            Self::EnemyAttack { enemy, damage } => {
                write!(f, "{enemy} attacks for {damage} damage!")
            }
            Self::EnemySkill {
                enemy,
                skill,
                damage,
                effect,
            } => {
                write!(f, "{enemy} used {skill} for {damage} damage!")?;
                if let Some(effect) = effect {
                    write!(f, " {effect}")?;
                }
                Ok(())
            }
            Self::PhaseChange { enemy } => write!(f, "{enemy} enters phase 2!"),
            Self::Victory { experience } => {
                write!(f, "Victory! Gained {experience} experience!")
            }
            Self::LevelUp { player, report } => write!(
                f,
                "{player} reached level {}! HP {}, ATK {}",
                report.level, report.max_health, report.attack_power
            ),
            Self::Defeat { player } => write!(f, "{player} was defeated!"),
        }
    }
}

/// Most recent battle entries, oldest first.
///
/// Holds at most [`GameConfig::BATTLE_LOG_CAPACITY`] entries; pushing onto a
/// full log drops the oldest one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: ArrayVec<BattleLogEntry, { GameConfig::BATTLE_LOG_CAPACITY }>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: BattleLogEntry) {
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleLogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&BattleLogEntry> {
        self.entries.last()
    }

    /// Rendered lines, most recent last.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
