//! Content loaders for reading game data from files.
//!
//! RON for rosters and spawns, TOML for [`lorma_core::GameConfig`]. Every
//! loader is a unit struct with a `load(path)` entry point; [`ContentFactory`]
//! ties them to a data directory.

pub mod config;
pub mod enemies;
pub mod factory;
pub mod npcs;
pub mod player;
pub mod spawns;

pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use npcs::NpcLoader;
pub use player::PlayerLoader;
pub use spawns::SpawnLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
