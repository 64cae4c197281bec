//! The shipped data files describe the same game as the built-in roster.

use std::fs;

use lorma_content::{ContentFactory, EnemyLoader, NpcLoader, Roster};
use lorma_core::{GameConfig, RestartTarget};

#[test]
fn bundled_roster_matches_builtin() {
    let loaded = ContentFactory::bundled().load_roster().unwrap();
    let builtin = Roster::lorma();

    assert_eq!(loaded.player, builtin.player);
    assert_eq!(loaded.enemies, builtin.enemies);
    assert_eq!(loaded.npcs, builtin.npcs);
    assert_eq!(loaded.spawns, builtin.spawns);
}

#[test]
fn bundled_config_uses_default_values() {
    let config = ContentFactory::bundled().load_config().unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.restart_target, RestartTarget::MainMenu);
}

#[test]
fn duplicate_enemy_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enemies.ron");
    fs::write(
        &path,
        r#"[
            ("goblin", (name: "Goblin", max_health: 40, attack_power: 8, speed: 4)),
            ("goblin", (name: "Goblin", max_health: 40, attack_power: 8, speed: 4)),
        ]"#,
    )
    .unwrap();

    let error = EnemyLoader::load(&path).unwrap_err();
    assert!(error.to_string().contains("Duplicate enemy definition 'goblin'"));
}

#[test]
fn omitted_enemy_fields_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enemies.ron");
    fs::write(
        &path,
        r#"[("goblin", (name: "Goblin", max_health: 40, attack_power: 8, speed: 4))]"#,
    )
    .unwrap();

    let enemies = EnemyLoader::load(&path).unwrap();
    let goblin = &enemies[0].1;
    assert_eq!(goblin.experience_reward, GameConfig::DEFAULT_EXPERIENCE_REWARD);
    assert!(goblin.skills.is_none());
    assert!(!goblin.final_boss);
}

#[test]
fn npc_lines_are_attributed_to_the_npc() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("npcs.ron");
    fs::write(
        &path,
        r#"[("hermit", (name: "Hermit", lines: ["Go away."])), ("mute", (name: "Mute"))]"#,
    )
    .unwrap();

    let npcs = NpcLoader::load(&path).unwrap();
    let hermit: Vec<_> = npcs[0].1.dialogue().collect();
    assert_eq!(hermit[0].to_string(), "Hermit: Go away.");
    assert!(npcs[1].1.lines.is_empty());
}

#[test]
fn spawn_with_unknown_template_fails_the_roster() {
    let dir = tempfile::tempdir().unwrap();
    let bundled = ContentFactory::bundled();
    for file in ["config.toml", "player.ron", "enemies.ron", "npcs.ron"] {
        fs::copy(bundled.data_dir().join(file), dir.path().join(file)).unwrap();
    }
    fs::write(
        dir.path().join("spawns.ron"),
        r#"(
            player_start: (x: 0, y: 0),
            enemies: [(id: EnemyId(1), template: "dragon", position: (x: 10, y: 10))],
            npcs: [],
        )"#,
    )
    .unwrap();

    let error = ContentFactory::new(dir.path()).load_roster().unwrap_err();
    assert!(error.to_string().contains("unknown enemy 'dragon'"));
}
