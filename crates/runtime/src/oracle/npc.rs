//! NPC templates implementing [`lorma_core::NpcOracle`].
use lorma_core::{NpcOracle, NpcTemplate};
use std::collections::HashMap;

/// NpcOracle implementation with static NPC templates
pub struct NpcOracleImpl {
    templates: HashMap<String, NpcTemplate>,
}

impl NpcOracleImpl {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Add an NPC template
    pub fn add_template(&mut self, def_id: impl Into<String>, template: NpcTemplate) {
        self.templates.insert(def_id.into(), template);
    }
}

impl Default for NpcOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl NpcOracle for NpcOracleImpl {
    fn npc(&self, def_id: &str) -> Option<NpcTemplate> {
        self.templates.get(def_id).cloned()
    }
}
