//! Enemies and bosses.
//!
//! There is one enemy type. Whether an enemy behaves like a plain grunt or a
//! boss depends only on whether it carries a [`SkillSet`].

use super::{Character, Phase, Skill, SkillSet};
use crate::config::GameConfig;
use crate::env::Dice;
use crate::state::EnemyId;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EnemyId,
    pub character: Character,
    pub experience_reward: u32,
    pub skills: Option<SkillSet>,
    pub phase: Phase,
    /// Defeating this enemy wins the game.
    pub final_boss: bool,
}

impl Enemy {
    pub fn new(id: EnemyId, character: Character) -> Self {
        Self {
            id,
            character,
            experience_reward: GameConfig::DEFAULT_EXPERIENCE_REWARD,
            skills: None,
            phase: Phase::One,
            final_boss: false,
        }
    }

    #[must_use]
    pub fn with_experience_reward(mut self, experience_reward: u32) -> Self {
        self.experience_reward = experience_reward;
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: SkillSet) -> Self {
        self.skills = Some(skills);
        self
    }

    #[must_use]
    pub fn as_final_boss(mut self) -> Self {
        self.final_boss = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn health(&self) -> u32 {
        self.character.health()
    }

    pub fn is_alive(&self) -> bool {
        self.character.is_alive()
    }

    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.character.take_damage(amount)
    }

    pub fn has_skills(&self) -> bool {
        self.skills.as_ref().is_some_and(|skills| !skills.is_empty())
    }

    /// Picks the next skill to use.
    ///
    /// - No skills: a basic attack at `attack_power`.
    /// - First time below half health: switches to phase two and returns the
    ///   zero-damage phase-change marker.
    /// - Phase two: the strongest skill 70% of the time, otherwise uniform.
    /// - Phase one: uniform.
    pub fn choose_skill(&mut self, dice: &mut Dice) -> Skill {
        let Some(skills) = self.skills.as_ref().filter(|skills| !skills.is_empty()) else {
            return Skill::basic(self.character.attack_power);
        };

        if self.phase == Phase::One && self.character.health() < self.character.max_health() / 2
        {
            self.phase = Phase::Two;
            return Skill::phase_change();
        }

        if self.phase == Phase::Two && dice.chance(GameConfig::PHASE_TWO_FOCUS_PERCENT) {
            if let Some(strongest) = skills.strongest() {
                return strongest.clone();
            }
        }

        skills
            .get(dice.pick(skills.len()))
            .cloned()
            .unwrap_or_else(|| Skill::basic(self.character.attack_power))
    }
}
