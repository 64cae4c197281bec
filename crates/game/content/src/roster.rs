//! Built-in Lorma School roster.

use lorma_core::{
    EnemyId, EnemySpawn, EnemyTemplate, NpcId, NpcSpawn, NpcTemplate, PlayerTemplate, Position,
    Skill,
};

/// Where everything starts on a new game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spawns {
    pub player_start: Position,
    pub enemies: Vec<EnemySpawn>,
    pub npcs: Vec<NpcSpawn>,
}

/// All static content of one game: templates by definition id plus spawns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub player: PlayerTemplate,
    pub enemies: Vec<(String, EnemyTemplate)>,
    pub npcs: Vec<(String, NpcTemplate)>,
    pub spawns: Spawns,
}

/// (definition id, name, health, attack, experience, speed, x, y)
type EnemyRow = (&'static str, &'static str, u32, u32, u32, u32, i32, i32);

const ENEMIES: &[EnemyRow] = &[
    // Orc encampment
    ("orc_guard", "Orc Guard", 50, 10, 25, 2, 300, 250),
    ("orc_warrior", "Orc Warrior", 55, 12, 30, 3, 350, 300),
    ("orc_archer", "Orc Archer", 45, 8, 20, 5, 250, 200),
    // Dark mage area
    ("dark_mage", "Dark Mage", 60, 12, 30, 3, 700, 450),
    ("shadow_apprentice", "Shadow Apprentice", 40, 9, 22, 4, 750, 500),
    ("necromancer", "Necromancer", 70, 15, 35, 2, 650, 400),
    // Goblin territory
    ("goblin", "Goblin", 40, 8, 20, 4, 350, 650),
    ("goblin_scout", "Goblin Scout", 35, 6, 15, 6, 400, 700),
    ("goblin_shaman", "Goblin Shaman", 45, 10, 25, 3, 300, 600),
    // Undead zone
    ("skeleton", "Skeleton", 45, 9, 22, 3, 850, 250),
    ("skeleton_archer", "Skeleton Archer", 40, 7, 18, 5, 900, 300),
    ("skeletal_knight", "Skeletal Knight", 60, 12, 30, 2, 800, 200),
    // Zombie swamp
    ("zombie", "Zombie", 70, 11, 35, 1, 1250, 350),
    ("zombie_brute", "Zombie Brute", 80, 13, 40, 1, 1300, 400),
    ("plague_zombie", "Plague Zombie", 65, 10, 30, 2, 1200, 300),
    // Troll mountains
    ("troll", "Troll", 80, 15, 40, 2, 1550, 650),
    ("mountain_troll", "Mountain Troll", 90, 17, 45, 1, 1600, 700),
    ("troll_berserker", "Troll Berserker", 85, 16, 42, 4, 1500, 600),
    // Outskirts
    ("forest_bandit", "Forest Bandit", 55, 11, 28, 4, 500, 100),
    ("desert_raider", "Desert Raider", 60, 12, 32, 5, 1000, 800),
    ("mountain_golem", "Mountain Golem", 100, 20, 50, 1, 200, 750),
    ("ice_witch", "Ice Witch", 65, 14, 35, 4, 1700, 200),
    ("wild_werewolf", "Wild Werewolf", 75, 16, 38, 7, 50, 500),
    ("thunder_mage", "Thunder Mage", 55, 13, 30, 5, 1800, 600),
    ("wandering_mercenary", "Wandering Mercenary", 50, 10, 25, 3, 600, 100),
    ("lost_warrior", "Lost Warrior", 55, 11, 28, 3, 1100, 450),
    ("rogue_assassin", "Rogue Assassin", 45, 9, 22, 8, 250, 800),
    ("cursed_knight", "Cursed Knight", 70, 14, 35, 3, 1600, 100),
];

pub const GRANDMASTER_ID: &str = "grandmaster_mary_ann";
const GRANDMASTER_SPAWN: Position = Position { x: 1700, y: 1700 };

/// (definition id, name, x, y, lines)
type NpcRow = (&'static str, &'static str, i32, i32, [&'static str; 3]);

const NPCS: &[NpcRow] = &[
    (
        "village_elder",
        "Village Elder",
        200,
        200,
        [
            "Welcome to our village, young warrior!",
            "These are dangerous times...",
            "Be careful on your journey.",
        ],
    ),
    (
        "merchant",
        "Merchant",
        600,
        400,
        [
            "Hello there! Looking to trade?",
            "I have the finest goods in all the land!",
            "Come back anytime!",
        ],
    ),
    (
        "classmate",
        "Classmate",
        400,
        400,
        [
            "Hey there! Welcome to Lorma School!",
            "Watch out for the Grandmasters!",
            "Good luck on your journey!",
        ],
    ),
    (
        "teacher",
        "Teacher",
        800,
        600,
        [
            "Hello student! Are you prepared for your challenges?",
            "The Grandmaster is very powerful.",
            "Defeat the enemies to grow stronger!",
        ],
    ),
    (
        "old_wizard",
        "Old Wizard",
        1300,
        400,
        [
            "Welcome to the tower of knowledge!",
            "I sense great potential in you.",
            "Master your skills to overcome the final test.",
        ],
    ),
];

fn grandmaster() -> EnemyTemplate {
    EnemyTemplate::new("Grandmaster Mary-Ann", 300, 20, 4)
        .with_experience_reward(500)
        .with_skills([
            Skill::new("Late Penalty", 15).with_effect("Speed decreased"),
            Skill::new("Dark Magic", 25).with_effect("Critical hit!"),
            Skill::new("Harsh Grading", 20).with_effect("Attack decreased"),
        ])
        .as_final_boss()
}

impl Roster {
    /// The Lorma School map: 28 roaming enemies, the final boss and five NPCs.
    ///
    /// Enemy ids follow spawn order starting at 1; the boss comes last.
    pub fn lorma() -> Self {
        let mut enemies = Vec::with_capacity(ENEMIES.len() + 1);
        let mut enemy_spawns = Vec::with_capacity(ENEMIES.len() + 1);

        for (index, &(def_id, name, health, attack, reward, speed, x, y)) in
            ENEMIES.iter().enumerate()
        {
            enemies.push((
                def_id.to_owned(),
                EnemyTemplate::new(name, health, attack, speed).with_experience_reward(reward),
            ));
            enemy_spawns.push(EnemySpawn {
                id: EnemyId(index as u32 + 1),
                template: def_id.to_owned(),
                position: Position::new(x, y),
            });
        }

        enemies.push((GRANDMASTER_ID.to_owned(), grandmaster()));
        enemy_spawns.push(EnemySpawn {
            id: EnemyId(ENEMIES.len() as u32 + 1),
            template: GRANDMASTER_ID.to_owned(),
            position: GRANDMASTER_SPAWN,
        });

        let mut npcs = Vec::with_capacity(NPCS.len());
        let mut npc_spawns = Vec::with_capacity(NPCS.len());
        for (index, &(def_id, name, x, y, lines)) in NPCS.iter().enumerate() {
            let template = lines
                .iter()
                .fold(NpcTemplate::new(name), |npc, line| npc.says(*line));
            npcs.push((def_id.to_owned(), template));
            npc_spawns.push(NpcSpawn {
                id: NpcId(index as u32 + 1),
                template: def_id.to_owned(),
                position: Position::new(x, y),
            });
        }

        Self {
            player: PlayerTemplate::default(),
            enemies,
            npcs,
            spawns: Spawns {
                player_start: Position::new(400, 300),
                enemies: enemy_spawns,
                npcs: npc_spawns,
            },
        }
    }

    pub fn enemy_template(&self, def_id: &str) -> Option<&EnemyTemplate> {
        self.enemies
            .iter()
            .find(|(id, _)| id == def_id)
            .map(|(_, template)| template)
    }

    pub fn npc_template(&self, def_id: &str) -> Option<&NpcTemplate> {
        self.npcs
            .iter()
            .find(|(id, _)| id == def_id)
            .map(|(_, template)| template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spawn_resolves_to_a_template() {
        let roster = Roster::lorma();
        for spawn in &roster.spawns.enemies {
            assert!(
                roster.enemy_template(&spawn.template).is_some(),
                "missing enemy template {}",
                spawn.template
            );
        }
        for spawn in &roster.spawns.npcs {
            assert!(roster.npc_template(&spawn.template).is_some());
        }
    }

    #[test]
    fn exactly_one_final_boss() {
        let roster = Roster::lorma();
        let bosses: Vec<_> = roster
            .enemies
            .iter()
            .filter(|(_, template)| template.final_boss)
            .collect();
        assert_eq!(bosses.len(), 1);
        assert_eq!(bosses[0].0, GRANDMASTER_ID);
        assert_eq!(bosses[0].1.skills.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn enemy_ids_are_unique_and_sequential() {
        let roster = Roster::lorma();
        let ids: Vec<u32> = roster.spawns.enemies.iter().map(|s| s.id.0).collect();
        let expected: Vec<u32> = (1..=ids.len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn npcs_speak_their_own_lines() {
        let roster = Roster::lorma();
        let classmate = roster.npc_template("classmate").unwrap();
        let lines: Vec<_> = classmate.dialogue().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].speaker(), Some("Classmate"));
        assert_eq!(lines[0].text(), "Hey there! Welcome to Lorma School!");
    }
}
