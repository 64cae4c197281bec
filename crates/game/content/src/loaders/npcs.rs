//! NPC catalog loader.
//!
//! NPC files list plain strings; every line is attributed to the NPC that
//! owns it when the template is built.

use std::path::Path;

use lorma_core::NpcTemplate;

use crate::loaders::{LoadResult, read_file};

#[derive(serde::Deserialize)]
struct NpcSpec {
    name: String,
    #[serde(default)]
    lines: Vec<String>,
}

/// Loader for NPC catalog from RON files.
pub struct NpcLoader;

impl NpcLoader {
    /// RON format: `Vec<(String, (name: String, lines: Vec<String>))>`.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, NpcTemplate)>> {
        let content = read_file(path)?;
        let specs: Vec<(String, NpcSpec)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC catalog RON: {}", e))?;

        Ok(specs
            .into_iter()
            .map(|(def_id, spec)| {
                let template = spec
                    .lines
                    .into_iter()
                    .fold(NpcTemplate::new(spec.name), |npc, line| npc.says(line));
                (def_id, template)
            })
            .collect())
    }
}
