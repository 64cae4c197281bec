//! Damage scaling and mitigation.

use crate::config::GameConfig;

/// Multiply and round half-to-even.
///
/// Growth factors like 1.1 are not exact in binary, so `15 * 1.1` lands just
/// above 16.5 and rounds up; exact ties such as `15 * 1.5 = 22.5` round to
/// the even neighbour.
pub fn round_scaled(value: u32, factor: f64) -> u32 {
    let scaled = (f64::from(value) * factor).round_ties_even();
    if scaled <= 0.0 {
        0
    } else if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}

/// Scale by an integer percentage, rounding half-to-even.
pub fn scale_percent(value: u32, percent: u32) -> u32 {
    let product = u64::from(value) * u64::from(percent);
    let quotient = product / 100;
    let remainder = product % 100;
    let rounded = match remainder {
        r if r > 50 => quotient + 1,
        50 => quotient + (quotient % 2),
        _ => quotient,
    };
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Base damage of a skill attack: `round(attack_power * 1.5)`.
pub fn skill_damage(attack_power: u32) -> u32 {
    scale_percent(attack_power, GameConfig::SKILL_MULTIPLIER_PERCENT)
}

/// Damage after a critical hit: `round(damage * 1.5)`.
pub fn critical_damage(damage: u32) -> u32 {
    scale_percent(damage, GameConfig::CRITICAL_MULTIPLIER_PERCENT)
}

/// Flat defense reduction with a floor of 1.
///
/// Zero raw damage stays zero: non-attacks such as a phase change never turn
/// into chip damage.
pub fn mitigate(raw_damage: u32, defense: u32) -> u32 {
    if raw_damage == 0 {
        return 0;
    }
    raw_damage.saturating_sub(defense).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_damage_rounds_half_to_even() {
        assert_eq!(skill_damage(10), 15);
        assert_eq!(skill_damage(15), 22);
        assert_eq!(skill_damage(17), 26);
    }

    #[test]
    fn critical_damage_scales_by_half() {
        assert_eq!(critical_damage(20), 30);
        assert_eq!(critical_damage(15), 22);
        assert_eq!(critical_damage(1), 2);
    }

    #[test]
    fn mitigation_floors_at_one() {
        assert_eq!(mitigate(15, 0), 15);
        assert_eq!(mitigate(15, 5), 10);
        assert_eq!(mitigate(3, 10), 1);
        assert_eq!(mitigate(0, 10), 0);
    }

    #[test]
    fn round_scaled_matches_float_growth() {
        assert_eq!(round_scaled(15, 1.1), 17);
        assert_eq!(round_scaled(30, 1.1), 33);
        assert_eq!(round_scaled(100, 1.3), 130);
        assert_eq!(round_scaled(100, 1.3 * 1.3), 169);
    }
}
