//! Spawn table loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::Spawns;

/// Loader for spawn points from RON files.
pub struct SpawnLoader;

impl SpawnLoader {
    /// RON format: a single `Spawns` record.
    pub fn load(path: &Path) -> LoadResult<Spawns> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse spawns RON: {}", e))
    }
}
