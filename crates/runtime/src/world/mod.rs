//! Space, as far as the session needs it.
//!
//! Rendering, tile maps and physics live outside this workspace. The session
//! only asks a [`World`] which enemies the player touches and which NPCs are
//! close enough to talk to, then feeds the answers to the engine.
mod grid;

pub use grid::{GridWorld, WorldConfig};

use lorma_content::Spawns;
use lorma_core::{EnemyId, NpcId, Position};

/// Collision and proximity facts for the session.
pub trait World {
    /// Rebuild from the spawn records (new game).
    fn regenerate(&mut self, spawns: &Spawns);

    /// Moves the player one step in the given direction and lets enemies act.
    ///
    /// `(0, 0)` keeps the player still; enemies still advance.
    fn step(&mut self, dx: i32, dy: i32);

    fn player_position(&self) -> Position;

    /// Enemies still present, in spawn order.
    fn enemy_ids(&self) -> Vec<EnemyId>;

    fn player_collides_with_enemy(&self, id: EnemyId) -> bool;

    fn npc_ids(&self) -> Vec<NpcId>;

    fn player_near_npc(&self, id: NpcId) -> bool;

    /// Drops defeated enemies; unknown ids are ignored.
    fn remove_enemies(&mut self, ids: &[EnemyId]);

    /// Every enemy the player currently touches.
    fn colliding_enemies(&self) -> Vec<EnemyId> {
        self.enemy_ids()
            .into_iter()
            .filter(|id| self.player_collides_with_enemy(*id))
            .collect()
    }

    /// First NPC within talking range, in spawn order.
    fn npc_in_range(&self) -> Option<NpcId> {
        self.npc_ids()
            .into_iter()
            .find(|id| self.player_near_npc(*id))
    }
}
