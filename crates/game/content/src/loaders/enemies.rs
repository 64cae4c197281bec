//! Enemy catalog loader.

use std::collections::HashSet;
use std::path::Path;

use lorma_core::EnemyTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for the enemy catalog from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// RON format: `Vec<(String, EnemyTemplate)>`.
    ///
    /// Definition ids must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        let content = read_file(path)?;
        let enemies: Vec<(String, EnemyTemplate)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for (def_id, _) in &enemies {
            if !seen.insert(def_id.as_str()) {
                anyhow::bail!("Duplicate enemy definition '{}'", def_id);
            }
        }

        Ok(enemies)
    }
}
