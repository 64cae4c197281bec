//! The player character: leveling, defense, crits and the heal ability.

use super::{AbilityError, Character};
use crate::combat::round_scaled;
use crate::config::GameConfig;

/// Cooldown-gated self heal.
///
/// `cooldown` counts completed enemy phases still to wait; it only ever goes
/// down, except when the ability is used.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealAbility {
    pub amount: u32,
    cooldown: u32,
    pub cooldown_max: u32,
}

impl HealAbility {
    pub fn new(amount: u32, cooldown_max: u32) -> Self {
        Self {
            amount,
            cooldown: 0,
            cooldown_max,
        }
    }

    /// Remaining cooldown; 0 means ready.
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

/// One level gained, with the stats it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
    pub attack_power: u32,
    pub heal_amount: u32,
    pub experience_to_next_level: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub character: Character,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    /// Flat reduction applied to every incoming hit (minimum damage 1).
    pub defense: u32,
    /// Percent chance (0-100) that an attack deals 1.5x damage.
    pub critical_chance: u8,
    pub heal: HealAbility,
}

impl Player {
    /// Level 1 player with no defense, no crit chance and a ready heal.
    pub fn new(character: Character, heal: HealAbility) -> Self {
        Self {
            character,
            level: 1,
            experience: 0,
            experience_to_next_level: GameConfig::BASE_EXPERIENCE_TO_LEVEL,
            defense: 0,
            critical_chance: 0,
            heal,
        }
    }

    #[must_use]
    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }

    #[must_use]
    pub fn with_critical_chance(mut self, critical_chance: u8) -> Self {
        self.critical_chance = critical_chance.min(100);
        self
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn health(&self) -> u32 {
        self.character.health()
    }

    pub fn max_health(&self) -> u32 {
        self.character.max_health()
    }

    pub fn attack_power(&self) -> u32 {
        self.character.attack_power
    }

    pub fn speed(&self) -> u32 {
        self.character.speed
    }

    pub fn is_defeated(&self) -> bool {
        self.character.is_defeated()
    }

    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.character.take_damage(amount)
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Leftover experience carries into the next level, so one large reward
    /// can cascade through several levels. Each level reached is reported in
    /// order.
    pub fn gain_experience(&mut self, amount: u32) -> Vec<LevelUp> {
        self.experience = self.experience.saturating_add(amount);

        let mut report = Vec::new();
        while self.experience_to_next_level > 0 && self.experience >= self.experience_to_next_level
        {
            let threshold = self.experience_to_next_level;
            report.push(self.level_up());
            self.experience -= threshold;
        }
        report
    }

    fn level_up(&mut self) -> LevelUp {
        self.level += 1;

        self.character.raise_max_health(GameConfig::HEALTH_PER_LEVEL);
        self.character.restore_full();
        self.character.attack_power =
            round_scaled(self.character.attack_power, GameConfig::STAT_GROWTH);
        self.heal.amount = round_scaled(self.heal.amount, GameConfig::STAT_GROWTH);
        self.experience_to_next_level = experience_threshold(self.level);

        LevelUp {
            level: self.level,
            max_health: self.max_health(),
            attack_power: self.attack_power(),
            heal_amount: self.heal.amount,
            experience_to_next_level: self.experience_to_next_level,
        }
    }

    /// Heals up to the ability's amount and starts its cooldown.
    ///
    /// Returns the health actually restored. Fails without touching state
    /// while the cooldown is running.
    pub fn use_heal(&mut self) -> Result<u32, AbilityError> {
        if !self.heal.is_ready() {
            return Err(AbilityError::OnCooldown {
                remaining: self.heal.cooldown,
            });
        }

        let restored = self.character.heal(self.heal.amount);
        self.heal.cooldown = self.heal.cooldown_max;
        Ok(restored)
    }

    /// Advances ability cooldowns by one enemy phase.
    pub fn tick_cooldowns(&mut self) {
        self.heal.tick();
    }

    /// Full health and ready abilities, keeping level and experience.
    pub fn restore_for_retry(&mut self) {
        self.character.restore_full();
        self.heal.cooldown = 0;
    }
}

/// Experience needed to leave `level`: `round(100 * 1.3^(level - 1))`.
pub fn experience_threshold(level: u32) -> u32 {
    let exponent = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
    round_scaled(
        GameConfig::BASE_EXPERIENCE_TO_LEVEL,
        GameConfig::EXPERIENCE_GROWTH.powi(exponent),
    )
}
