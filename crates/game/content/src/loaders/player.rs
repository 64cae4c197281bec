//! Player template loader.

use std::path::Path;

use lorma_core::PlayerTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for the player template from a RON file.
pub struct PlayerLoader;

impl PlayerLoader {
    /// RON format: a single `PlayerTemplate`; omitted fields use the defaults.
    pub fn load(path: &Path) -> LoadResult<PlayerTemplate> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse player template RON: {}", e))
    }
}
