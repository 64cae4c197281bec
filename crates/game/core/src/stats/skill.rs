//! Named enemy attacks.

/// Name of the pseudo-skill an enemy reports when it enters phase two.
pub const PHASE_CHANGE: &str = "Phase Change";
/// Name of the pseudo-skill used when an enemy has nothing better.
pub const BASIC_ATTACK: &str = "Attack";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub damage: u32,
    /// Flavor text shown when the skill lands, e.g. "Attack decreased".
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            effect: None,
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    /// Plain attack at the given power.
    pub fn basic(attack_power: u32) -> Self {
        Self::new(BASIC_ATTACK, attack_power)
    }

    /// Zero-damage marker for the phase transition.
    pub fn phase_change() -> Self {
        Self::new(PHASE_CHANGE, 0).with_effect("Entered phase 2")
    }

    pub fn is_phase_change(&self) -> bool {
        self.name == PHASE_CHANGE && self.damage == 0
    }
}

/// Ordered skill list of one enemy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillSet(Vec<Skill>);

impl SkillSet {
    pub fn new(skills: impl IntoIterator<Item = Skill>) -> Self {
        Self(skills.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Skill> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.0.iter()
    }

    /// Highest-damage skill; the first listed wins ties.
    pub fn strongest(&self) -> Option<&Skill> {
        self.0.iter().fold(None, |best: Option<&Skill>, skill| match best {
            Some(current) if current.damage >= skill.damage => Some(current),
            _ => Some(skill),
        })
    }
}

impl FromIterator<Skill> for SkillSet {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Behavior phase of a skilled enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    One,
    /// Entered once health drops below half; favors the strongest skill.
    Two,
}

impl Phase {
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strongest_prefers_first_on_ties() {
        let set: SkillSet = [
            Skill::new("Late Penalty", 15),
            Skill::new("Dark Magic", 25),
            Skill::new("Curse", 25),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.strongest().map(|s| s.name.as_str()), Some("Dark Magic"));
        assert!(SkillSet::default().strongest().is_none());
    }
}
