//! Actor oracle implementing [`lorma_core::ActorOracle`].

use std::collections::HashMap;

use lorma_core::{ActorOracle, EnemyTemplate, PlayerTemplate};

/// Oracle providing the player template and enemy templates by definition id.
pub struct ActorOracleImpl {
    player: PlayerTemplate,
    templates: HashMap<String, EnemyTemplate>,
}

impl ActorOracleImpl {
    /// Create an oracle with the default player and no enemies.
    pub fn new() -> Self {
        Self {
            player: PlayerTemplate::default(),
            templates: HashMap::new(),
        }
    }

    pub fn with_player(mut self, player: PlayerTemplate) -> Self {
        self.player = player;
        self
    }

    /// Add an enemy template to the oracle.
    ///
    /// # Arguments
    ///
    /// * `id` - Enemy definition ID (e.g., "orc_guard", "grandmaster_mary_ann")
    /// * `template` - Stats, reward and optional skills
    pub fn add(&mut self, id: impl Into<String>, template: EnemyTemplate) {
        self.templates.insert(id.into(), template);
    }
}

impl Default for ActorOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorOracle for ActorOracleImpl {
    fn player(&self) -> PlayerTemplate {
        self.player.clone()
    }

    fn enemy(&self, def_id: &str) -> Option<EnemyTemplate> {
        self.templates.get(def_id).cloned()
    }
}
