//! Combatant templates and the oracle that serves them.
//!
//! Templates are plain data, deserializable from RON, and turn into live
//! [`Player`]/[`Enemy`] values at spawn time. The [`ActorOracle`] trait lets
//! the runtime look templates up by definition id (e.g. "orc_guard").

use crate::config::GameConfig;
use crate::state::{EnemyId, Position};
use crate::stats::{Character, Enemy, HealAbility, Player, Skill, SkillSet};

/// Starting stats of the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerTemplate {
    pub name: String,
    pub max_health: u32,
    pub attack_power: u32,
    pub speed: u32,
    pub defense: u32,
    pub critical_chance: u8,
    pub heal_amount: u32,
    pub heal_cooldown: u32,
}

impl PlayerTemplate {
    /// Level 1 player at full health.
    pub fn to_player(&self) -> Player {
        Player::new(
            Character::new(
                self.name.clone(),
                self.max_health,
                self.attack_power,
                self.speed,
            ),
            HealAbility::new(self.heal_amount, self.heal_cooldown),
        )
        .with_defense(self.defense)
        .with_critical_chance(self.critical_chance)
    }
}

impl Default for PlayerTemplate {
    fn default() -> Self {
        Self {
            name: "Player".to_owned(),
            max_health: 100,
            attack_power: 15,
            speed: 3,
            defense: 2,
            critical_chance: 10,
            heal_amount: 30,
            heal_cooldown: 3,
        }
    }
}

/// Enemy or boss definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub max_health: u32,
    pub attack_power: u32,
    pub speed: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_experience_reward"))]
    pub experience_reward: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Option<Vec<Skill>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub final_boss: bool,
}

#[cfg(feature = "serde")]
fn default_experience_reward() -> u32 {
    GameConfig::DEFAULT_EXPERIENCE_REWARD
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, max_health: u32, attack_power: u32, speed: u32) -> Self {
        Self {
            name: name.into(),
            max_health,
            attack_power,
            speed,
            experience_reward: GameConfig::DEFAULT_EXPERIENCE_REWARD,
            skills: None,
            final_boss: false,
        }
    }

    #[must_use]
    pub fn with_experience_reward(mut self, experience_reward: u32) -> Self {
        self.experience_reward = experience_reward;
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        self.skills = Some(skills.into_iter().collect());
        self
    }

    #[must_use]
    pub fn as_final_boss(mut self) -> Self {
        self.final_boss = true;
        self
    }

    /// Spawns a fresh enemy with the given world identity.
    pub fn to_enemy(&self, id: EnemyId) -> Enemy {
        let mut enemy = Enemy::new(
            id,
            Character::new(
                self.name.clone(),
                self.max_health,
                self.attack_power,
                self.speed,
            ),
        )
        .with_experience_reward(self.experience_reward);

        if let Some(skills) = &self.skills {
            enemy = enemy.with_skills(SkillSet::new(skills.iter().cloned()));
        }
        if self.final_boss {
            enemy = enemy.as_final_boss();
        }
        enemy
    }
}

/// Placement of one enemy in the world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpawn {
    pub id: EnemyId,
    /// Definition id looked up through [`ActorOracle::enemy`].
    pub template: String,
    pub position: Position,
}

/// Oracle providing combatant templates.
pub trait ActorOracle: Send + Sync {
    /// Template used for every new game.
    fn player(&self) -> PlayerTemplate;

    /// Enemy template for a definition id, if known.
    fn enemy(&self, def_id: &str) -> Option<EnemyTemplate>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Phase;

    #[test]
    fn player_template_spawns_a_level_one_player() {
        let player = PlayerTemplate::default().to_player();
        assert_eq!(player.level, 1);
        assert_eq!(player.health(), 100);
        assert_eq!(player.defense, 2);
        assert_eq!(player.critical_chance, 10);
        assert!(player.heal.is_ready());
        assert_eq!(player.heal.cooldown_max, 3);
    }

    #[test]
    fn enemy_template_carries_skills_and_boss_flag() {
        let template = EnemyTemplate::new("Grandmaster Mary-Ann", 300, 20, 2)
            .with_experience_reward(500)
            .with_skills([Skill::new("Dark Magic", 25)])
            .as_final_boss();

        let boss = template.to_enemy(EnemyId(3));
        assert_eq!(boss.id, EnemyId(3));
        assert_eq!(boss.experience_reward, 500);
        assert!(boss.has_skills());
        assert!(boss.final_boss);
        assert_eq!(boss.phase, Phase::One);

        let grunt = EnemyTemplate::new("Goblin", 40, 8, 4).to_enemy(EnemyId(1));
        assert!(!grunt.has_skills());
        assert_eq!(grunt.experience_reward, GameConfig::DEFAULT_EXPERIENCE_REWARD);
    }
}
