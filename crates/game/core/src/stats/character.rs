//! Shared health/attack/speed block of every combatant.

/// Base combat data shared by the player and every enemy.
///
/// Health is private so the `0 <= health <= max_health` invariant can only be
/// changed through clamping operations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    health: u32,
    max_health: u32,
    pub attack_power: u32,
    pub speed: u32,
}

impl Character {
    /// Creates a character at full health.
    pub fn new(name: impl Into<String>, max_health: u32, attack_power: u32, speed: u32) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            attack_power,
            speed,
        }
    }

    /// Overrides current health, clamped to `max_health`.
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(self.max_health);
        self
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies damage, saturating at zero. Returns whether the character is
    /// now defeated.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.is_defeated()
    }

    /// Restores up to `amount` health without exceeding the maximum.
    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = self.health.saturating_add(amount).min(self.max_health) - self.health;
        self.health += healed;
        healed
    }

    pub fn restore_full(&mut self) {
        self.health = self.max_health;
    }

    /// Raises the health ceiling. Current health is left alone.
    pub(crate) fn raise_max_health(&mut self, amount: u32) {
        self.max_health = self.max_health.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero_and_stays_there() {
        let mut orc = Character::new("Orc", 50, 10, 2);
        assert!(!orc.take_damage(20));
        assert_eq!(orc.health(), 30);

        assert!(orc.take_damage(999));
        assert_eq!(orc.health(), 0);

        assert!(orc.take_damage(5));
        assert_eq!(orc.health(), 0);
    }

    #[test]
    fn zero_damage_is_a_no_op() {
        let mut orc = Character::new("Orc", 50, 10, 2);
        assert!(!orc.take_damage(0));
        assert_eq!(orc.health(), 50);
    }

    #[test]
    fn heal_never_exceeds_maximum() {
        let mut hero = Character::new("Hero", 100, 15, 3).with_health(90);
        assert_eq!(hero.heal(30), 10);
        assert_eq!(hero.health(), 100);
        assert_eq!(hero.heal(30), 0);
    }

    #[test]
    fn with_health_is_clamped() {
        let hero = Character::new("Hero", 100, 15, 3).with_health(500);
        assert_eq!(hero.health(), 100);
    }
}
