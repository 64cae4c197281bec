//! Dodge and critical-hit checks.

use crate::config::GameConfig;

/// Player dodge chance in percent: `min(5 + speed * 2, 30)`.
pub fn dodge_chance(speed: u32) -> u32 {
    speed
        .saturating_mul(GameConfig::DODGE_PER_SPEED_PERCENT)
        .saturating_add(GameConfig::DODGE_BASE_PERCENT)
        .min(GameConfig::DODGE_CAP_PERCENT)
}

/// Check a dodge against a d100 roll (1-100).
pub fn check_dodge(speed: u32, roll: u32) -> bool {
    roll <= dodge_chance(speed)
}

/// Check a critical hit against a d100 roll (1-100).
///
/// `critical_chance` is a percentage; values above 100 behave like 100.
pub fn check_critical(critical_chance: u8, roll: u32) -> bool {
    roll <= u32::from(critical_chance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dodge_chance_grows_with_speed_and_caps() {
        assert_eq!(dodge_chance(0), 5);
        assert_eq!(dodge_chance(3), 11);
        assert_eq!(dodge_chance(12), 29);
        assert_eq!(dodge_chance(13), 30);
        assert_eq!(dodge_chance(u32::MAX), 30);
    }

    #[test]
    fn rolls_at_the_threshold_succeed() {
        assert!(check_dodge(0, 5));
        assert!(!check_dodge(0, 6));
        assert!(check_critical(10, 10));
        assert!(!check_critical(10, 11));
        assert!(!check_critical(0, 1));
    }
}
