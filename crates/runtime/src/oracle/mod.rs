//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose the `lorma-core` oracle traits and bundle them
//! with the spawn records into an [`OracleManager`], which turns the ids a
//! world reports into battle-ready enemies and dialogue lines. The data is
//! immutable at runtime; dynamic state lives in [`lorma_core::GameState`].
mod actors;
mod npc;

use std::collections::HashMap;
use std::sync::Arc;

use lorma_content::{Roster, Spawns};
use lorma_core::{
    ActorOracle, DialogueLine, Enemy, EnemyId, EnemySpawn, NpcId, NpcOracle, NpcSpawn, Player,
};

pub use actors::ActorOracleImpl;
pub use npc::NpcOracleImpl;

use crate::api::{Result, RuntimeError};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    actors: Arc<ActorOracleImpl>,
    npcs: Arc<NpcOracleImpl>,
    spawns: Arc<Spawns>,
    enemy_spawns: Arc<HashMap<EnemyId, EnemySpawn>>,
    npc_spawns: Arc<HashMap<NpcId, NpcSpawn>>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(actors: Arc<ActorOracleImpl>, npcs: Arc<NpcOracleImpl>, spawns: Spawns) -> Self {
        let enemy_spawns = spawns
            .enemies
            .iter()
            .map(|spawn| (spawn.id, spawn.clone()))
            .collect();
        let npc_spawns = spawns
            .npcs
            .iter()
            .map(|spawn| (spawn.id, spawn.clone()))
            .collect();

        Self {
            actors,
            npcs,
            spawns: Arc::new(spawns),
            enemy_spawns: Arc::new(enemy_spawns),
            npc_spawns: Arc::new(npc_spawns),
        }
    }

    /// Splits a content roster into oracles plus spawn records.
    pub fn from_roster(roster: Roster) -> Self {
        let mut actors = ActorOracleImpl::new().with_player(roster.player);
        for (id, template) in roster.enemies {
            actors.add(id, template);
        }

        let mut npcs = NpcOracleImpl::new();
        for (id, template) in roster.npcs {
            npcs.add_template(id, template);
        }

        Self::new(Arc::new(actors), Arc::new(npcs), roster.spawns)
    }

    pub fn spawns(&self) -> &Spawns {
        &self.spawns
    }

    /// A fresh player at level 1.
    pub fn player(&self) -> Player {
        self.actors.player().to_player()
    }

    /// Battle-ready enemy for a spawned id, at full health.
    pub fn enemy(&self, id: EnemyId) -> Result<Enemy> {
        let spawn = self
            .enemy_spawns
            .get(&id)
            .ok_or(RuntimeError::UnknownEnemy(id))?;
        let template =
            self.actors
                .enemy(&spawn.template)
                .ok_or_else(|| RuntimeError::UnknownTemplate {
                    id: id.to_string(),
                    template: spawn.template.clone(),
                })?;
        Ok(template.to_enemy(id))
    }

    /// Everything a spawned NPC says, in order.
    pub fn npc_lines(&self, id: NpcId) -> Result<Vec<DialogueLine>> {
        let spawn = self
            .npc_spawns
            .get(&id)
            .ok_or(RuntimeError::UnknownNpc(id))?;
        let template =
            self.npcs
                .npc(&spawn.template)
                .ok_or_else(|| RuntimeError::UnknownTemplate {
                    id: id.to_string(),
                    template: spawn.template.clone(),
                })?;
        Ok(template.dialogue().collect())
    }
}

impl Default for OracleManager {
    /// The built-in Lorma School content.
    fn default() -> Self {
        Self::from_roster(Roster::lorma())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorma_core::EnemyTemplate;

    #[test]
    fn resolves_spawned_enemies_at_full_health() {
        let oracles = OracleManager::default();
        let orc = oracles.enemy(EnemyId(1)).unwrap();
        assert_eq!(orc.name(), "Orc Guard");
        assert_eq!(orc.health(), 50);
        assert_eq!(orc.id, EnemyId(1));

        let boss = oracles.enemy(EnemyId(29)).unwrap();
        assert!(boss.final_boss);
        assert!(boss.has_skills());
    }

    #[test]
    fn roster_player_and_templates_flow_through() {
        let mut roster = Roster::lorma();
        roster.player.name = "Ruth".into();
        roster.player.attack_power = 40;
        roster.enemies.retain(|(id, _)| id == "orc_guard");
        let oracles = OracleManager::from_roster(roster);

        let player = oracles.player();
        assert_eq!(player.name(), "Ruth");
        assert_eq!(player.attack_power(), 40);
        assert_eq!(oracles.enemy(EnemyId(1)).unwrap().name(), "Orc Guard");
        assert!(matches!(
            oracles.enemy(EnemyId(29)),
            Err(RuntimeError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let oracles = OracleManager::default();
        assert_eq!(
            oracles.enemy(EnemyId(99)).unwrap_err(),
            RuntimeError::UnknownEnemy(EnemyId(99))
        );
        assert_eq!(
            oracles.npc_lines(NpcId(42)).unwrap_err(),
            RuntimeError::UnknownNpc(NpcId(42))
        );
    }

    #[test]
    fn spawn_with_missing_template_is_reported() {
        let spawns = Spawns {
            enemies: vec![EnemySpawn {
                id: EnemyId(1),
                template: "ghost".into(),
                position: Default::default(),
            }],
            ..Spawns::default()
        };
        let mut actors = ActorOracleImpl::new();
        actors.add("orc", EnemyTemplate::new("Orc", 10, 1, 1));
        let oracles = OracleManager::new(Arc::new(actors), Arc::default(), spawns);

        assert!(matches!(
            oracles.enemy(EnemyId(1)),
            Err(RuntimeError::UnknownTemplate { template, .. }) if template == "ghost"
        ));
    }

    #[test]
    fn npc_lines_come_in_order() {
        let oracles = OracleManager::default();
        let lines = oracles.npc_lines(NpcId(1)).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].speaker(), Some("Village Elder"));
        assert_eq!(lines[2].text(), "Be careful on your journey.");
    }
}
