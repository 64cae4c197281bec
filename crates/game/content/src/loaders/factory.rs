//! Content factory for building a roster from data files.

use std::path::{Path, PathBuf};

use lorma_core::{EnemyTemplate, GameConfig, NpcTemplate, PlayerTemplate};

use crate::loaders::{
    ConfigLoader, EnemyLoader, LoadResult, NpcLoader, PlayerLoader, SpawnLoader,
};
use crate::roster::{Roster, Spawns};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── player.ron
/// ├── enemies.ron
/// ├── npcs.ron
/// └── spawns.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    pub fn load_player(&self) -> LoadResult<PlayerTemplate> {
        PlayerLoader::load(&self.data_dir.join("player.ron"))
    }

    pub fn load_enemies(&self) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    pub fn load_npcs(&self) -> LoadResult<Vec<(String, NpcTemplate)>> {
        NpcLoader::load(&self.data_dir.join("npcs.ron"))
    }

    pub fn load_spawns(&self) -> LoadResult<Spawns> {
        SpawnLoader::load(&self.data_dir.join("spawns.ron"))
    }

    /// Load every roster file and check that each spawn names a known template.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let roster = Roster {
            player: self.load_player()?,
            enemies: self.load_enemies()?,
            npcs: self.load_npcs()?,
            spawns: self.load_spawns()?,
        };

        for spawn in &roster.spawns.enemies {
            if roster.enemy_template(&spawn.template).is_none() {
                anyhow::bail!(
                    "Spawn {} references unknown enemy '{}'",
                    spawn.id,
                    spawn.template
                );
            }
        }
        for spawn in &roster.spawns.npcs {
            if roster.npc_template(&spawn.template).is_none() {
                anyhow::bail!(
                    "Spawn {} references unknown NPC '{}'",
                    spawn.id,
                    spawn.template
                );
            }
        }

        Ok(roster)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
